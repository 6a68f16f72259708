//! Domain layer: chess types, game history and snapshots.
//! Nothing in here depends on GPUI.

pub mod chess;
pub mod history;
pub mod snapshot;

pub use chess::{Piece, PieceColor, PieceKind, shakmaty_to_piece, to_square};
pub use history::{GameHistory, MoveRecord, move_pairs};
pub use snapshot::{GameSnapshot, LastMove};
