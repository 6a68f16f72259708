//! Linear game history: the starting position plus every executed move.
//!
//! This is a pure domain module with no GPUI dependencies.

use serde::{Deserialize, Serialize};
use shakmaty::{Chess, EnPassantMode, Position, Square};

use crate::domain::chess::{PieceColor, PieceKind, square_name};

/// One executed move, as recorded in the history log
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    #[serde(with = "square_name")]
    pub from: Square,
    #[serde(with = "square_name")]
    pub to: Square,
    /// Side that made the move
    pub color: PieceColor,
    /// Kind of the piece that moved
    pub kind: PieceKind,
    /// SAN notation of the move, without check suffix
    pub san: String,
    /// Kind of the piece this move captured, if any
    pub captured: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
    /// Whether the move gives check
    pub is_check: bool,
    /// Whether the move gives checkmate
    pub is_checkmate: bool,
}

impl MoveRecord {
    /// SAN with `+` or `#` appended
    pub fn display_san(&self) -> String {
        let mut text = self.san.clone();
        if self.is_checkmate {
            text.push('#');
        } else if self.is_check {
            text.push('+');
        }
        text
    }
}

#[derive(Clone, Debug)]
struct HistoryEntry {
    /// The position after this move was played
    position: Chess,
    record: MoveRecord,
}

/// The sequence of positions a game went through
#[derive(Clone, Debug)]
pub struct GameHistory {
    start: Chess,
    entries: Vec<HistoryEntry>,
}

impl GameHistory {
    /// Create a history starting from the standard position
    pub fn new() -> Self {
        Self::from_position(Chess::default())
    }

    /// Create a history starting from an arbitrary position
    pub fn from_position(start: Chess) -> Self {
        Self {
            start,
            entries: Vec::new(),
        }
    }

    /// The position the game is currently in
    pub fn current(&self) -> &Chess {
        self.entries
            .last()
            .map(|entry| &entry.position)
            .unwrap_or(&self.start)
    }

    pub fn push(&mut self, position: Chess, record: MoveRecord) {
        self.entries.push(HistoryEntry { position, record });
    }

    /// Remove the last move. Returns the removed record, or None at the start
    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.entries.pop().map(|entry| entry.record)
    }

    /// Drop all moves and start over from `start`
    pub fn reset(&mut self, start: Chess) {
        self.start = start;
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.entries.last().map(|entry| &entry.record)
    }

    pub fn records(&self) -> impl Iterator<Item = &MoveRecord> {
        self.entries.iter().map(|entry| &entry.record)
    }

    /// How many times the current position has occurred, the current one included.
    ///
    /// Positions are the same when board, side to move, castling rights and
    /// capturable en passant square all match.
    pub fn repetition_count(&self) -> usize {
        let current = self.current();
        std::iter::once(&self.start)
            .chain(self.entries.iter().map(|entry| &entry.position))
            .filter(|pos| same_position(pos, current))
            .count()
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

fn same_position(a: &Chess, b: &Chess) -> bool {
    a.turn() == b.turn()
        && a.board() == b.board()
        && a.castles().castling_rights() == b.castles().castling_rights()
        && a.ep_square(EnPassantMode::Legal) == b.ep_square(EnPassantMode::Legal)
}

/// Get the move number (1-based, for display) for a ply index (0 = first move).
/// Returns (move_number, is_black_move)
pub fn move_number(ply_index: usize) -> (usize, bool) {
    (ply_index / 2 + 1, ply_index % 2 == 1)
}

/// A numbered pair of moves as shown in the history panel
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovePair<'a> {
    pub number: usize,
    pub white: Option<&'a MoveRecord>,
    pub black: Option<&'a MoveRecord>,
}

/// Group records into numbered white/black pairs.
///
/// Records are assumed to alternate starting with White; a log that starts
/// with Black gets an empty white slot in the first pair.
pub fn move_pairs(records: &[MoveRecord]) -> Vec<MovePair<'_>> {
    let offset = match records.first() {
        Some(first) if first.color == PieceColor::Black => 1,
        _ => 0,
    };

    let mut pairs: Vec<MovePair<'_>> = Vec::new();
    for (i, record) in records.iter().enumerate() {
        let (number, is_black) = move_number(i + offset);
        if !is_black || pairs.is_empty() {
            pairs.push(MovePair {
                number,
                white: None,
                black: None,
            });
        }
        if let Some(pair) = pairs.last_mut() {
            if is_black {
                pair.black = Some(record);
            } else {
                pair.white = Some(record);
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(color: PieceColor, san: &str) -> MoveRecord {
        MoveRecord {
            from: Square::E2,
            to: Square::E4,
            color,
            kind: PieceKind::Pawn,
            san: san.to_string(),
            captured: None,
            promotion: None,
            is_check: false,
            is_checkmate: false,
        }
    }

    #[test]
    fn test_move_number() {
        assert_eq!(move_number(0), (1, false));
        assert_eq!(move_number(1), (1, true));
        assert_eq!(move_number(2), (2, false));
        assert_eq!(move_number(5), (3, true));
    }

    #[test]
    fn test_push_pop() {
        let mut history = GameHistory::new();
        assert!(history.is_empty());
        assert!(history.pop().is_none());

        history.push(Chess::default(), record(PieceColor::White, "e4"));
        assert_eq!(history.records().count(), 1);
        assert_eq!(history.last().map(|r| r.san.as_str()), Some("e4"));

        let popped = history.pop();
        assert_eq!(popped.map(|r| r.san), Some("e4".to_string()));
        assert!(history.is_empty());
    }

    #[test]
    fn test_display_san_suffix() {
        let mut r = record(PieceColor::White, "Qh5");
        assert_eq!(r.display_san(), "Qh5");
        r.is_check = true;
        assert_eq!(r.display_san(), "Qh5+");
        r.is_checkmate = true;
        assert_eq!(r.display_san(), "Qh5#");
    }

    #[test]
    fn test_move_pairs() {
        let records = vec![
            record(PieceColor::White, "e4"),
            record(PieceColor::Black, "e5"),
            record(PieceColor::White, "Nf3"),
        ];
        let pairs = move_pairs(&records);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].number, 1);
        assert_eq!(pairs[0].white.map(|r| r.san.as_str()), Some("e4"));
        assert_eq!(pairs[0].black.map(|r| r.san.as_str()), Some("e5"));
        assert_eq!(pairs[1].number, 2);
        assert!(pairs[1].black.is_none());
    }

    #[test]
    fn test_move_pairs_black_first() {
        let records = vec![
            record(PieceColor::Black, "e5"),
            record(PieceColor::White, "Nf3"),
        ];
        let pairs = move_pairs(&records);
        assert_eq!(pairs.len(), 2);
        assert!(pairs[0].white.is_none());
        assert_eq!(pairs[0].black.map(|r| r.san.as_str()), Some("e5"));
        assert_eq!(pairs[1].number, 2);
    }

    #[test]
    fn test_repetition_count_at_start() {
        let history = GameHistory::new();
        assert_eq!(history.repetition_count(), 1);
    }
}
