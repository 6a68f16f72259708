//! Move list panel - displays the game's move history as numbered pairs.

use gpui::{Div, div, prelude::*, px, rgb};

use crate::ui::theme::{BORDER_COLOR, MOVE_LIST_BG, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::view_models::MovePairDisplay;

const LATEST_ROW_BG: u32 = 0x2f3b52;

/// Render the move list panel from prepared move rows.
/// Returns a Div element that can be used as a child.
pub fn render_move_list_panel(rows: &[MovePairDisplay]) -> Div {
    let moves_content = if rows.is_empty() {
        div()
            .text_color(rgb(TEXT_SECONDARY))
            .text_sm()
            .child("No moves yet")
    } else {
        div()
            .flex()
            .flex_col()
            .gap_1()
            .children(rows.iter().map(render_move_row))
    };

    div()
        .flex_1()
        .min_h_0()
        .flex()
        .flex_col()
        .bg(rgb(MOVE_LIST_BG))
        .border_1()
        .border_color(rgb(BORDER_COLOR))
        .rounded_md()
        .overflow_hidden()
        // Header (fixed)
        .child(
            div()
                .p_4()
                .pb_2()
                .text_color(rgb(TEXT_PRIMARY))
                .border_b_1()
                .border_color(rgb(BORDER_COLOR))
                .child("Move History"),
        )
        // Scrollable moves content
        .child(
            div()
                .id("move-list-scroll")
                .flex_1()
                .overflow_y_scroll()
                .p_4()
                .pt_2()
                .child(moves_content),
        )
}

fn render_move_row(row: &MovePairDisplay) -> impl IntoElement {
    div()
        .flex()
        .items_center()
        .gap_2()
        .px_2()
        .py_1()
        .rounded(px(3.0))
        .text_sm()
        .when(row.is_latest, |el| el.bg(rgb(LATEST_ROW_BG)))
        .child(
            div()
                .text_color(rgb(TEXT_SECONDARY))
                .w(px(40.0))
                .child(format!("{}.", row.number)),
        )
        .child(
            div()
                .text_color(rgb(TEXT_PRIMARY))
                .flex_1()
                .child(row.white.clone()),
        )
        .child(
            div()
                .text_color(rgb(TEXT_PRIMARY))
                .flex_1()
                .child(row.black.clone().unwrap_or_default()),
        )
}
