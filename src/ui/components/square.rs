//! Square rendering component.

use crate::ui::components::render_piece;
use crate::ui::theme::{LEGAL_MARKER, highlighted_square_color};
use crate::ui::view_models::{LegalTarget, SquareDisplay};
use gpui::{div, prelude::*, px, rgb};

/// Render a single board square with its piece and highlights
pub fn render_square(
    display: SquareDisplay,
    square_size: f32,
    piece_size: f32,
    dot_size: f32,
) -> impl IntoElement {
    let marker = display.legal_target.map(|target| match target {
        LegalTarget::Move => div()
            .absolute()
            .size(px(dot_size))
            .rounded_full()
            .bg(rgb(LEGAL_MARKER))
            .opacity(0.35),
        // ring around a capturable piece
        LegalTarget::Capture => div()
            .absolute()
            .size(px(square_size))
            .rounded_full()
            .border_4()
            .border_color(rgb(LEGAL_MARKER))
            .opacity(0.35),
    });

    div()
        .relative()
        .flex_shrink_0() // never shrink - maintain aspect ratio
        .size(px(square_size))
        .bg(highlighted_square_color(
            display.row,
            display.col,
            display.highlight,
        ))
        .flex()
        .items_center()
        .justify_center()
        .when_some(display.piece, |el, p| el.child(render_piece(p, piece_size)))
        .when_some(marker, |el, m| el.child(m))
}
