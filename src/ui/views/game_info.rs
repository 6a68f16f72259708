//! Game info panel - status banner and the two players with their captures.

use gpui::{Div, div, prelude::*, px, rgb};

use crate::config::PlayerNames;
use crate::domain::{GameSnapshot, PieceColor};
use crate::ui::components::render_piece_icon;
use crate::ui::display::{player, status};
use crate::ui::theme::{
    ACTIVE_PLAYER_BG, BORDER_COLOR, CAPTURED_PIECE_SIZE, MOVE_LIST_BG, STATUS_CHECK,
    STATUS_GAME_OVER, TEXT_PRIMARY,
};
use crate::ui::view_models::{PlayerDisplay, StatusTone};

const PLAYER_IDLE_BG: u32 = 0x252525;

pub fn render_game_info(snapshot: &GameSnapshot, players: &PlayerNames) -> Div {
    let banner = status(snapshot, players);
    let banner_color = match banner.tone {
        StatusTone::Normal => TEXT_PRIMARY,
        StatusTone::Check => STATUS_CHECK,
        StatusTone::GameOver => STATUS_GAME_OVER,
    };

    div()
        .flex_shrink_0()
        .flex()
        .flex_col()
        .gap_2()
        .p_3()
        .bg(rgb(MOVE_LIST_BG))
        .border_1()
        .border_color(rgb(BORDER_COLOR))
        .rounded_md()
        .child(
            div()
                .py_2()
                .flex()
                .justify_center()
                .text_color(rgb(banner_color))
                .font_weight(gpui::FontWeight::SEMIBOLD)
                .child(banner.text),
        )
        // Black on top, matching the board orientation
        .child(render_player(player(snapshot, players, PieceColor::Black)))
        .child(render_player(player(snapshot, players, PieceColor::White)))
}

fn render_player(display: PlayerDisplay) -> impl IntoElement {
    let badge = match display.color {
        PieceColor::White => "W",
        PieceColor::Black => "B",
    };

    div()
        .flex()
        .items_center()
        .justify_between()
        .gap_2()
        .p_2()
        .rounded(px(4.0))
        .bg(rgb(if display.is_active {
            ACTIVE_PLAYER_BG
        } else {
            PLAYER_IDLE_BG
        }))
        .child(
            div()
                .flex()
                .items_center()
                .gap_2()
                .text_color(rgb(TEXT_PRIMARY))
                .child(
                    div()
                        .size(px(24.0))
                        .rounded_full()
                        .flex()
                        .items_center()
                        .justify_center()
                        .border_1()
                        .border_color(rgb(BORDER_COLOR))
                        .text_xs()
                        .child(badge),
                )
                .child(display.name),
        )
        .child(
            div()
                .flex()
                .flex_wrap()
                .children(
                    display
                        .captured
                        .into_iter()
                        .map(|piece| render_piece_icon(piece, CAPTURED_PIECE_SIZE)),
                ),
        )
}
