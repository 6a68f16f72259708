//! Chess board view - the main board with click-to-move interaction.

use gpui::{
    Context, Entity, EventEmitter, MouseButton, MouseDownEvent, Pixels, Subscription, Window,
    canvas, div, prelude::*, px, rgb,
};
use gpui_component::resizable::{h_resizable, resizable_panel};
use tracing::trace;

use crate::config::PlayerNames;
use crate::models::{ChessSession, InteractionState};
use crate::ui::BoardLayout;
use crate::ui::components::{render_promotion_overlay, render_square};
use crate::ui::display::{board_squares, move_pair_rows};
use crate::ui::theme::{BOARD_PADDING, INITIAL_LEFT_PANEL, INITIAL_RIGHT_PANEL, PANEL_BG};
use crate::ui::views::{render_controls, render_game_info, render_move_list_panel};

/// Emitted when the players ask to go back to name entry
pub struct ChangePlayers;

/// The main chess board view that observes a ChessSession
pub struct ChessBoardView {
    model: Entity<ChessSession>,
    players: PlayerNames,
    /// Measured board panel size
    layout: BoardLayout,
    _subscription: Subscription,
}

impl ChessBoardView {
    pub fn new(model: Entity<ChessSession>, players: PlayerNames, cx: &mut Context<Self>) -> Self {
        let _subscription = cx.observe(&model, |_, _, cx| cx.notify());
        Self {
            model,
            players,
            layout: BoardLayout::default(),
            _subscription,
        }
    }

    pub fn players(&self) -> &PlayerNames {
        &self.players
    }
}

impl EventEmitter<ChangePlayers> for ChessBoardView {}

impl Render for ChessBoardView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let view_measure = cx.entity().clone();
        let view_players = cx.entity().clone();
        let model_down = self.model.clone();
        let layout = self.layout;

        let session = self.model.read(cx);
        let game = session.game();
        let snapshot = game.snapshot();
        let pending_color = match session.state() {
            InteractionState::PendingPromotion(_) => Some(game.current_turn()),
            _ => None,
        };

        // Sizing based on measured panel dimensions
        let square_size = layout.square_size();
        let piece_size = layout.piece_size();
        let dot_size = layout.legal_dot_size();
        let board_total_size = layout.board_total_size();

        let squares = board_squares(game);
        let board = div()
            .flex_shrink_0()
            .flex()
            .flex_col()
            .w(px(board_total_size))
            .h(px(board_total_size))
            .overflow_hidden()
            .rounded_md()
            .children(squares.chunks(8).map(|row| {
                div().flex().flex_shrink_0().children(
                    row.iter()
                        .map(|&sq| render_square(sq, square_size, piece_size, dot_size)),
                )
            }));

        let board_panel_content = div()
            .id("board-panel")
            .relative()
            .size_full()
            .overflow_hidden()
            .bg(rgb(PANEL_BG))
            .p(px(BOARD_PADDING))
            .child(board)
            // Left click: select, move or cancel
            .on_mouse_down(
                MouseButton::Left,
                move |ev: &MouseDownEvent, _window, cx| {
                    let pos = ev.position;
                    if let Some(square) = layout.square_at(pos.x.into(), pos.y.into()) {
                        trace!(%square, "board tap");
                        model_down.update(cx, |session, cx| {
                            session.tap(square);
                            cx.notify();
                        });
                    }
                },
            );

        // Canvas to measure actual panel size
        let measure_canvas = canvas(
            move |bounds, _window, cx| {
                view_measure.update(cx, |view, cx| {
                    if view.layout.panel_size != bounds.size {
                        view.layout = BoardLayout::new(bounds.size);
                        cx.notify();
                    }
                });
            },
            |_, _, _, _| {},
        )
        .absolute()
        .top_0()
        .left_0()
        .size_full();

        // Wrap board panel content with measuring canvas
        let board_panel_with_measure = div()
            .relative()
            .size_full()
            .child(measure_canvas)
            .child(board_panel_content)
            .when_some(pending_color, |el, color| {
                el.child(render_promotion_overlay(&self.model, color, piece_size))
            });

        // Side panel: status, history, controls
        let side_panel = div()
            .size_full()
            .flex()
            .flex_col()
            .gap_3()
            .bg(rgb(PANEL_BG))
            .p(px(BOARD_PADDING))
            .child(render_game_info(snapshot, &self.players))
            .child(render_move_list_panel(&move_pair_rows(snapshot)))
            .child(render_controls(
                &self.model,
                game.can_undo(),
                session.sound_enabled(),
                move |cx| view_players.update(cx, |_, cx| cx.emit(ChangePlayers)),
            ));

        // Main resizable layout
        div().size_full().font_family("Berkeley Mono").child(
            h_resizable("chess-layout")
                .child(
                    resizable_panel()
                        .size(px(INITIAL_LEFT_PANEL))
                        .size_range(px(320.)..px(1200.))
                        .child(board_panel_with_measure),
                )
                .child(
                    resizable_panel()
                        .size(px(INITIAL_RIGHT_PANEL))
                        .size_range(px(220.)..Pixels::MAX)
                        .child(side_panel),
                ),
        )
    }
}
