//! View models for rendering the board and side panels.
//!
//! These types are DTOs (Data Transfer Objects) that prepare game state
//! for display in the UI. They live in the UI layer, not the domain layer.

use shakmaty::Square;

use crate::domain::{Piece, PieceColor};
use crate::ui::theme::SquareHighlight;

/// How a legal destination is marked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegalTarget {
    /// Empty square: small dot
    Move,
    /// Occupied square: ring around the piece
    Capture,
}

/// Display data for one board square
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SquareDisplay {
    pub row: usize,
    pub col: usize,
    pub square: Square,
    pub piece: Option<Piece>,
    pub highlight: SquareHighlight,
    pub legal_target: Option<LegalTarget>,
}

/// One numbered row of the move history
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovePairDisplay {
    pub number: usize,
    /// White's move, `...` when the log starts with Black
    pub white: String,
    pub black: Option<String>,
    /// Whether this row holds the most recent move
    pub is_latest: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Normal,
    Check,
    GameOver,
}

/// The status banner above the player list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusDisplay {
    pub text: String,
    pub tone: StatusTone,
}

/// A player row with the pieces that player has captured
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerDisplay {
    pub name: String,
    pub color: PieceColor,
    pub is_active: bool,
    pub captured: Vec<Piece>,
}

/// What a side panel control button does
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlAction {
    Undo,
    ToggleSound,
    ChangePlayers,
}

impl ControlAction {
    /// Element id, stable while the label changes
    pub fn element_id(self) -> &'static str {
        match self {
            ControlAction::Undo => "control-undo",
            ControlAction::ToggleSound => "control-sound",
            ControlAction::ChangePlayers => "control-change-players",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlDisplay {
    pub action: ControlAction,
    pub label: &'static str,
    pub enabled: bool,
}
