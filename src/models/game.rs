//! Game state model - the adapter between the rules engine and the board.
//!
//! `GameModel` owns the only `shakmaty` position of a session (through its
//! history) and rebuilds a [`GameSnapshot`] after every mutation. All
//! operations are total: failures are reported as `false` or ignored.

use shakmaty::san::San;
use shakmaty::{Chess, File, Move, Position, Square};
use tracing::{debug, info};

use crate::domain::{
    GameHistory, GameSnapshot, LastMove, MoveRecord, Piece, PieceColor, PieceKind,
    shakmaty_to_piece,
};

/// The main game model containing all chess game state
pub struct GameModel {
    history: GameHistory,
    /// Currently selected origin square
    selected: Option<Square>,
    /// Destinations reachable from `selected`, sorted and deduplicated
    legal_moves: Vec<Square>,
    last_move: Option<LastMove>,
    snapshot: GameSnapshot,
}

impl GameModel {
    pub fn new() -> Self {
        Self::from_position(Chess::default())
    }

    /// Start a game from an arbitrary legal position
    pub fn from_position(position: Chess) -> Self {
        let history = GameHistory::from_position(position);
        let snapshot = GameSnapshot::derive(&history, None);
        Self {
            history,
            selected: None,
            legal_moves: Vec::new(),
            last_move: None,
            snapshot,
        }
    }

    /// Get the current position
    pub fn position(&self) -> &Chess {
        self.history.current()
    }

    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    pub fn selected_square(&self) -> Option<Square> {
        self.selected
    }

    pub fn legal_moves(&self) -> &[Square] {
        &self.legal_moves
    }

    pub fn is_legal_destination(&self, square: Square) -> bool {
        self.legal_moves.binary_search(&square).is_ok()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn current_turn(&self) -> PieceColor {
        PieceColor::from_shakmaty(self.position().turn())
    }

    /// Get piece at a square of the current position
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position().board().piece_at(square).map(shakmaty_to_piece)
    }

    /// Square of the side-to-move king while it is in check
    pub fn king_in_check_square(&self) -> Option<Square> {
        if !self.snapshot.is_check {
            return None;
        }
        let position = self.position();
        position.board().king_of(position.turn())
    }

    /// Destination squares the engine allows from `from`
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        let mut destinations: Vec<Square> = self
            .position()
            .legal_moves()
            .iter()
            .filter_map(move_squares)
            .filter(|(origin, _)| *origin == from)
            .map(|(_, to)| to)
            .collect();
        destinations.sort();
        destinations.dedup();
        destinations
    }

    /// Select a square, or report that the tap should become a move.
    ///
    /// Returns true when a piece of the side to move was selected. Returns
    /// false without touching the selection when `square` is a legal
    /// destination of the current selection; otherwise clears the selection.
    pub fn select_square(&mut self, square: Square) -> bool {
        if let Some(piece) = self.piece_at(square) {
            if piece.color == self.current_turn() {
                self.selected = Some(square);
                self.legal_moves = self.legal_destinations(square);
                debug!(%square, moves = self.legal_moves.len(), "selected square");
                return true;
            }
        }

        if self.selected.is_some() && self.is_legal_destination(square) {
            return false;
        }

        self.clear_selection();
        false
    }

    /// Try to make a move from one square to another. Returns true if successful.
    ///
    /// A pawn reaching the last rank promotes to `promotion`, or to a queen
    /// when no kind is given. Legality is entirely up to the engine.
    pub fn make_move(&mut self, from: Square, to: Square, promotion: Option<PieceKind>) -> bool {
        let position = self.position().clone();
        let Some(mv) = find_move(&position, from, to, promotion) else {
            debug!(%from, %to, ?promotion, "rejected move");
            return false;
        };

        let san = San::from_move(&position, mv.clone()).to_string();
        let color = PieceColor::from_shakmaty(position.turn());
        let kind = PieceKind::from_role(mv.role());
        let captured = mv.capture().map(PieceKind::from_role);
        let promoted = mv.promotion().map(PieceKind::from_role);

        let next = match position.play(mv) {
            Ok(next) => next,
            Err(err) => {
                debug!(%from, %to, ?err, "engine refused move");
                return false;
            }
        };

        let record = MoveRecord {
            from,
            to,
            color,
            kind,
            san,
            captured,
            promotion: promoted,
            is_check: next.is_check(),
            is_checkmate: next.is_checkmate(),
        };
        debug!(san = %record.display_san(), "played move");

        self.history.push(next, record);
        self.last_move = Some(LastMove { from, to });
        self.clear_selection();
        self.refresh();
        true
    }

    /// Take back the last move. Does nothing at the start of the game
    pub fn undo_move(&mut self) {
        if let Some(record) = self.history.pop() {
            debug!(san = %record.display_san(), "undid move");
        }
        self.last_move = self.history.last().map(|record| LastMove {
            from: record.from,
            to: record.to,
        });
        self.clear_selection();
        self.refresh();
    }

    /// Reset to the standard starting position
    pub fn new_game(&mut self) {
        self.history.reset(Chess::default());
        self.last_move = None;
        self.clear_selection();
        self.refresh();
        info!("started new game");
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.legal_moves.clear();
    }

    fn refresh(&mut self) {
        self.snapshot = GameSnapshot::derive(&self.history, self.last_move);
    }
}

impl Default for GameModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Origin and board destination of a move as the user taps it.
///
/// Castling is reported as the king's two-file step (g1/c1, g8/c8).
fn move_squares(m: &Move) -> Option<(Square, Square)> {
    match m {
        Move::Normal { from, to, .. } => Some((*from, *to)),
        Move::EnPassant { from, to } => Some((*from, *to)),
        Move::Castle { king, rook } => {
            let king_dest = if rook.file() == File::H {
                Square::from_coords(File::G, rook.rank())
            } else {
                Square::from_coords(File::C, rook.rank())
            };
            Some((*king, king_dest))
        }
        Move::Put { .. } => None,
    }
}

/// Find the engine's legal move matching the tapped squares
fn find_move(
    position: &Chess,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> Option<Move> {
    let wanted = promotion.unwrap_or(PieceKind::Queen).to_role();
    position.legal_moves().into_iter().find(|m| {
        move_squares(m) == Some((from, to))
            && match m.promotion() {
                Some(role) => role == wanted,
                None => true,
            }
    })
}
