//! Display generation for the board and side panels.
//!
//! This module transforms game state into display-ready view models.
//! It lives in the UI layer and depends on domain + models, not vice versa.

use crate::config::PlayerNames;
use crate::domain::{GameSnapshot, Piece, PieceColor, move_pairs, to_square};
use crate::models::GameModel;
use crate::ui::theme::SquareHighlight;
use crate::ui::view_models::{
    ControlAction, ControlDisplay, LegalTarget, MovePairDisplay, PlayerDisplay, SquareDisplay,
    StatusDisplay, StatusTone,
};

/// All 64 squares in row-major order (a8 first)
pub fn board_squares(game: &GameModel) -> Vec<SquareDisplay> {
    let snapshot = game.snapshot();
    let selected = game.selected_square();
    let king_in_check = game.king_in_check_square();

    (0..8)
        .flat_map(|row| (0..8).map(move |col| (row, col)))
        .map(|(row, col)| {
            let square = to_square(row, col);
            let piece = game.piece_at(square);
            let legal_target = game.is_legal_destination(square).then_some(if piece.is_some() {
                LegalTarget::Capture
            } else {
                LegalTarget::Move
            });

            SquareDisplay {
                row,
                col,
                square,
                piece,
                highlight: SquareHighlight {
                    selected: selected == Some(square),
                    last_move: snapshot
                        .last_move
                        .is_some_and(|last| last.touches(square)),
                    in_check: king_in_check == Some(square),
                },
                legal_target,
            }
        })
        .collect()
}

/// Numbered move rows for the history panel
pub fn move_pair_rows(snapshot: &GameSnapshot) -> Vec<MovePairDisplay> {
    let pairs = move_pairs(&snapshot.move_history);
    let last_index = pairs.len().saturating_sub(1);

    pairs
        .iter()
        .enumerate()
        .map(|(i, pair)| MovePairDisplay {
            number: pair.number,
            white: pair
                .white
                .map(|record| record.display_san())
                .unwrap_or_else(|| "...".to_string()),
            black: pair.black.map(|record| record.display_san()),
            is_latest: i == last_index,
        })
        .collect()
}

/// Status banner text for the current snapshot
pub fn status(snapshot: &GameSnapshot, players: &PlayerNames) -> StatusDisplay {
    if let Some(winner) = snapshot.winner() {
        return StatusDisplay {
            text: format!("Checkmate! {} wins!", players.name(winner)),
            tone: StatusTone::GameOver,
        };
    }
    if snapshot.is_stalemate {
        return StatusDisplay {
            text: "Stalemate - Draw!".to_string(),
            tone: StatusTone::GameOver,
        };
    }
    if snapshot.is_draw {
        return StatusDisplay {
            text: "Draw!".to_string(),
            tone: StatusTone::GameOver,
        };
    }
    if snapshot.is_check {
        return StatusDisplay {
            text: "Check!".to_string(),
            tone: StatusTone::Check,
        };
    }
    StatusDisplay {
        text: format!("{}'s turn", players.name(snapshot.turn)),
        tone: StatusTone::Normal,
    }
}

/// Player row for `color`, listing the opponent pieces it has taken
pub fn player(snapshot: &GameSnapshot, players: &PlayerNames, color: PieceColor) -> PlayerDisplay {
    let captured = snapshot
        .captured
        .sorted_for(color)
        .into_iter()
        .map(|kind| Piece::new(kind, color.opponent()))
        .collect();

    PlayerDisplay {
        name: players.name(color).to_string(),
        color,
        is_active: snapshot.turn == color && !snapshot.is_game_over,
        captured,
    }
}

/// The secondary control buttons, in display order
pub fn control_buttons(can_undo: bool, sound_enabled: bool) -> [ControlDisplay; 3] {
    [
        ControlDisplay {
            action: ControlAction::Undo,
            label: "Undo",
            enabled: can_undo,
        },
        ControlDisplay {
            action: ControlAction::ToggleSound,
            label: if sound_enabled { "Sound: on" } else { "Sound: off" },
            enabled: true,
        },
        ControlDisplay {
            action: ControlAction::ChangePlayers,
            label: "Change Players",
            enabled: true,
        },
    ]
}
