//! Promotion picker shown over the board while a pawn waits for its new kind.

use gpui::{Entity, SharedString, div, img, prelude::*, px, rgb, rgba};

use crate::domain::{Piece, PieceColor, PieceKind};
use crate::models::ChessSession;
use crate::ui::theme::{ACCENT, BORDER_COLOR, MOVE_LIST_BG, OVERLAY_BG, TEXT_PRIMARY, TEXT_SECONDARY};

const CHOICE_HOVER_BG: u32 = 0x3a3a3a;

/// Render the promotion overlay for the side that is promoting
pub fn render_promotion_overlay(
    model: &Entity<ChessSession>,
    color: PieceColor,
    choice_size: f32,
) -> impl IntoElement {
    let model_backdrop = model.clone();
    let model_cancel = model.clone();

    let choices = PieceKind::PROMOTION_CHOICES.map(|kind| {
        let model_choice = model.clone();
        let piece = Piece::new(kind, color);
        div()
            .id(SharedString::from(format!("promote-{}", kind.symbol())))
            .p_2()
            .rounded(px(6.0))
            .cursor_pointer()
            .hover(|s| s.bg(rgb(CHOICE_HOVER_BG)))
            .on_click(move |_ev, _window, cx| {
                model_choice.update(cx, |session, cx| {
                    session.confirm_promotion(kind);
                    cx.notify();
                });
            })
            .child(img(piece.svg_path()).size(px(choice_size)))
    });

    let card = div()
        .id("promotion-card")
        .flex()
        .flex_col()
        .items_center()
        .gap_3()
        .p_4()
        .bg(rgb(MOVE_LIST_BG))
        .border_1()
        .border_color(rgb(BORDER_COLOR))
        .rounded_md()
        // clicks inside the card must not reach the backdrop
        .on_click(|_ev, _window, cx| cx.stop_propagation())
        .child(
            div()
                .text_color(rgb(TEXT_PRIMARY))
                .font_weight(gpui::FontWeight::SEMIBOLD)
                .child("Choose promotion"),
        )
        .child(div().flex().gap_2().children(choices))
        .child(
            div()
                .id("promotion-cancel")
                .px_3()
                .py_1()
                .rounded(px(4.0))
                .cursor_pointer()
                .text_sm()
                .text_color(rgb(TEXT_SECONDARY))
                .hover(|s| s.text_color(rgb(ACCENT)))
                .on_click(move |_ev, _window, cx| {
                    model_cancel.update(cx, |session, cx| {
                        session.cancel_promotion();
                        cx.notify();
                    });
                })
                .child("Cancel"),
        );

    div()
        .id("promotion-overlay")
        .absolute()
        .inset_0()
        .occlude()
        .flex()
        .items_center()
        .justify_center()
        .bg(rgba(OVERLAY_BG))
        .on_click(move |_ev, _window, cx| {
            model_backdrop.update(cx, |session, cx| {
                session.cancel_promotion();
                cx.notify();
            });
        })
        .child(card)
}
