//! Game snapshot - the read-only view of game status the UI renders from.
//!
//! A snapshot is rebuilt from the history after every mutation and never
//! patched in place.

use serde::{Deserialize, Serialize};
use shakmaty::{Position, Square};

use crate::domain::chess::{PieceColor, PieceKind, square_name};
use crate::domain::history::{GameHistory, MoveRecord};

/// Halfmove clock value at which the fifty-move rule applies
const FIFTY_MOVE_HALFMOVES: u32 = 100;

/// The origin and destination of the most recent move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastMove {
    #[serde(with = "square_name")]
    pub from: Square,
    #[serde(with = "square_name")]
    pub to: Square,
}

impl LastMove {
    pub fn touches(&self, square: Square) -> bool {
        self.from == square || self.to == square
    }
}

/// Pieces captured so far, keyed by the side that captured them
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPieces {
    /// Kinds captured by White (black pieces)
    pub white: Vec<PieceKind>,
    /// Kinds captured by Black (white pieces)
    pub black: Vec<PieceKind>,
}

impl CapturedPieces {
    /// Scan move records for capture markers
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a MoveRecord>) -> Self {
        let mut captured = Self::default();
        for record in records {
            if let Some(kind) = record.captured {
                match record.color {
                    PieceColor::White => captured.white.push(kind),
                    PieceColor::Black => captured.black.push(kind),
                }
            }
        }
        captured
    }

    /// Pieces captured by `side`, ordered for display (queens first)
    pub fn sorted_for(&self, side: PieceColor) -> Vec<PieceKind> {
        let mut kinds = match side {
            PieceColor::White => self.white.clone(),
            PieceColor::Black => self.black.clone(),
        };
        kinds.sort_by_key(|kind| kind.tray_order());
        kinds
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub turn: PieceColor,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    pub is_draw: bool,
    pub is_game_over: bool,
    pub move_history: Vec<MoveRecord>,
    pub captured: CapturedPieces,
    pub last_move: Option<LastMove>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl GameSnapshot {
    /// Derive a fresh snapshot from the history and the last move played
    pub fn derive(history: &GameHistory, last_move: Option<LastMove>) -> Self {
        let position = history.current();
        let move_history: Vec<MoveRecord> = history.records().cloned().collect();
        let captured = CapturedPieces::from_records(&move_history);

        let is_checkmate = position.is_checkmate();
        let is_stalemate = position.is_stalemate();
        let halfmove_clock = position.halfmoves();
        let is_draw = is_stalemate
            || position.is_insufficient_material()
            || halfmove_clock >= FIFTY_MOVE_HALFMOVES
            || history.repetition_count() >= 3;

        Self {
            turn: PieceColor::from_shakmaty(position.turn()),
            is_check: position.is_check(),
            is_checkmate,
            is_stalemate,
            is_draw,
            is_game_over: is_checkmate || is_draw,
            move_history,
            captured,
            last_move,
            halfmove_clock,
            fullmove_number: position.fullmoves().get(),
        }
    }

    /// The side that won, if the game ended in checkmate
    pub fn winner(&self) -> Option<PieceColor> {
        self.is_checkmate.then(|| self.turn.opponent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(color: PieceColor, kind: Option<PieceKind>) -> MoveRecord {
        MoveRecord {
            from: Square::D4,
            to: Square::E5,
            color,
            kind: PieceKind::Pawn,
            san: "dxe5".to_string(),
            captured: kind,
            promotion: None,
            is_check: false,
            is_checkmate: false,
        }
    }

    #[test]
    fn test_captured_partitioned_by_capturing_side() {
        let records = vec![
            capture(PieceColor::White, Some(PieceKind::Pawn)),
            capture(PieceColor::Black, None),
            capture(PieceColor::Black, Some(PieceKind::Knight)),
            capture(PieceColor::White, Some(PieceKind::Queen)),
        ];
        let captured = CapturedPieces::from_records(&records);
        assert_eq!(captured.white, vec![PieceKind::Pawn, PieceKind::Queen]);
        assert_eq!(captured.black, vec![PieceKind::Knight]);
    }

    #[test]
    fn test_sorted_for_orders_queen_first() {
        let captured = CapturedPieces {
            white: vec![PieceKind::Pawn, PieceKind::Knight, PieceKind::Queen],
            black: vec![],
        };
        assert_eq!(
            captured.sorted_for(PieceColor::White),
            vec![PieceKind::Queen, PieceKind::Knight, PieceKind::Pawn]
        );
        assert!(captured.sorted_for(PieceColor::Black).is_empty());
    }

    #[test]
    fn test_initial_snapshot() {
        let snapshot = GameSnapshot::derive(&GameHistory::new(), None);
        assert_eq!(snapshot.turn, PieceColor::White);
        assert!(!snapshot.is_check);
        assert!(!snapshot.is_game_over);
        assert!(snapshot.move_history.is_empty());
        assert_eq!(snapshot.fullmove_number, 1);
        assert_eq!(snapshot.winner(), None);
    }

    #[test]
    fn test_last_move_touches() {
        let last = LastMove {
            from: Square::E2,
            to: Square::E4,
        };
        assert!(last.touches(Square::E2));
        assert!(last.touches(Square::E4));
        assert!(!last.touches(Square::E3));
    }
}
