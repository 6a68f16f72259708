//! Player setup - name entry shown before a game starts.

use gpui::{
    App, Context, Entity, EventEmitter, FontWeight, Subscription, Window, div, prelude::*, px, rgb,
};
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::input::{Input, InputEvent, InputState};

use crate::config::PlayerNames;
use crate::domain::PieceColor;
use crate::ui::theme::{BORDER_COLOR, MOVE_LIST_BG, PANEL_BG, TEXT_PRIMARY, TEXT_SECONDARY};

/// Emitted with the chosen names when the players start the game
pub struct PlayersChosen(pub PlayerNames);

pub struct PlayerSetupView {
    white_input: Entity<InputState>,
    black_input: Entity<InputState>,
    _subscriptions: Vec<Subscription>,
}

impl PlayerSetupView {
    pub fn new(prefill: &PlayerNames, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let white_input = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("Enter name...")
                .default_value(prefill.white.clone())
        });
        let black_input = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("Enter name...")
                .default_value(prefill.black.clone())
        });

        // Enter in either field starts the game
        let _subscriptions = [&white_input, &black_input]
            .into_iter()
            .map(|input| {
                cx.subscribe(input, |this, _, event: &InputEvent, cx| {
                    if let InputEvent::PressEnter { .. } = event {
                        this.start(cx);
                    }
                })
            })
            .collect();

        Self {
            white_input,
            black_input,
            _subscriptions,
        }
    }

    /// Names as currently typed, blank ones replaced by the color name
    fn names(&self, cx: &App) -> PlayerNames {
        PlayerNames::from_input(
            &self.white_input.read(cx).value(),
            &self.black_input.read(cx).value(),
        )
    }

    fn start(&mut self, cx: &mut Context<Self>) {
        cx.emit(PlayersChosen(self.names(cx)));
    }
}

impl EventEmitter<PlayersChosen> for PlayerSetupView {}

impl Render for PlayerSetupView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let view = cx.entity().clone();
        let start = Button::new("start-game")
            .label("Start Game")
            .primary()
            .w_full()
            .on_click(move |_, _, cx| view.update(cx, |setup, cx| setup.start(cx)));

        div()
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .bg(rgb(PANEL_BG))
            .font_family("Berkeley Mono")
            .child(
                div()
                    .w(px(380.0))
                    .flex()
                    .flex_col()
                    .gap_4()
                    .p_6()
                    .bg(rgb(MOVE_LIST_BG))
                    .border_1()
                    .border_color(rgb(BORDER_COLOR))
                    .rounded_md()
                    .child(
                        div()
                            .flex()
                            .justify_center()
                            .text_xl()
                            .font_weight(FontWeight::BOLD)
                            .text_color(rgb(TEXT_PRIMARY))
                            .child("Enter Player Names"),
                    )
                    .child(render_name_field(PieceColor::White, &self.white_input))
                    .child(render_name_field(PieceColor::Black, &self.black_input))
                    .child(start),
            )
    }
}

fn render_name_field(color: PieceColor, input: &Entity<InputState>) -> impl IntoElement {
    let (label, swatch) = match color {
        PieceColor::White => ("White Player", 0xf0f0f0),
        PieceColor::Black => ("Black Player", 0x111111),
    };

    div()
        .flex()
        .flex_col()
        .gap_1()
        .child(
            div()
                .flex()
                .items_center()
                .gap_2()
                .text_sm()
                .text_color(rgb(TEXT_SECONDARY))
                .child(
                    div()
                        .size(px(12.0))
                        .rounded_full()
                        .border_1()
                        .border_color(rgb(BORDER_COLOR))
                        .bg(rgb(swatch)),
                )
                .child(label),
        )
        .child(Input::new(input))
}
