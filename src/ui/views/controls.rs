//! Game controls - new game, undo, sound toggle and change players.

use gpui::{App, Entity, div, prelude::*, px, rgb};
use gpui_component::button::{Button, ButtonVariants};

use crate::models::ChessSession;
use crate::ui::display::control_buttons;
use crate::ui::theme::TEXT_PRIMARY;
use crate::ui::view_models::{ControlAction, ControlDisplay};

const NAV_BUTTON_BG: u32 = 0x3a3a3a;
const NAV_BUTTON_HOVER_BG: u32 = 0x4a4a4a;
const NAV_BUTTON_DISABLED: u32 = 0x555555;

pub fn render_controls(
    model: &Entity<ChessSession>,
    can_undo: bool,
    sound_enabled: bool,
    on_change_players: impl Fn(&mut App) + Clone + 'static,
) -> impl IntoElement {
    let model_new = model.clone();

    let new_game = Button::new("new-game")
        .label("New Game")
        .primary()
        .compact()
        .on_click(move |_, _, cx| {
            model_new.update(cx, |session, cx| {
                session.new_game();
                cx.notify();
            });
        });

    let buttons = control_buttons(can_undo, sound_enabled).map(|control| {
        let model = model.clone();
        let on_change_players = on_change_players.clone();
        render_control_button(control, move |cx| match control.action {
            ControlAction::Undo => model.update(cx, |session, cx| {
                session.undo();
                cx.notify();
            }),
            ControlAction::ToggleSound => model.update(cx, |session, cx| {
                session.toggle_sound();
                cx.notify();
            }),
            ControlAction::ChangePlayers => on_change_players(cx),
        })
    });

    div()
        .flex_shrink_0()
        .flex()
        .flex_wrap()
        .items_center()
        .justify_center()
        .gap_2()
        .child(new_game)
        .children(buttons)
}

/// Render a control button that greys out when disabled
fn render_control_button(
    control: ControlDisplay,
    on_click: impl Fn(&mut App) + 'static,
) -> impl IntoElement {
    let enabled = control.enabled;
    div()
        .id(control.action.element_id())
        .px_4()
        .py_1()
        .rounded(px(4.0))
        .text_sm()
        .text_color(if enabled {
            rgb(TEXT_PRIMARY)
        } else {
            rgb(NAV_BUTTON_DISABLED)
        })
        .when(enabled, |el| {
            el.bg(rgb(NAV_BUTTON_BG))
                .cursor_pointer()
                .hover(|s| s.bg(rgb(NAV_BUTTON_HOVER_BG)))
                .on_click(move |_ev, _window, cx| {
                    on_click(cx);
                })
        })
        .when(!enabled, |el| el.bg(rgb(0x2a2a2a)))
        .child(control.label)
}
