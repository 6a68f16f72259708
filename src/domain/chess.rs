//! Pure chess domain types and utilities.
//! No GPUI dependencies - this is the domain layer.

use serde::{Deserialize, Serialize};
use shakmaty::{Color as SColor, File, Rank, Role, Square};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn may promote to, in the order the promotion picker shows them
    pub const PROMOTION_CHOICES: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    pub fn from_role(role: Role) -> Self {
        match role {
            Role::Pawn => PieceKind::Pawn,
            Role::Knight => PieceKind::Knight,
            Role::Bishop => PieceKind::Bishop,
            Role::Rook => PieceKind::Rook,
            Role::Queen => PieceKind::Queen,
            Role::King => PieceKind::King,
        }
    }

    pub fn to_role(self) -> Role {
        match self {
            PieceKind::Pawn => Role::Pawn,
            PieceKind::Knight => Role::Knight,
            PieceKind::Bishop => Role::Bishop,
            PieceKind::Rook => Role::Rook,
            PieceKind::Queen => Role::Queen,
            PieceKind::King => Role::King,
        }
    }

    /// Lower-case piece letter (`p`, `n`, `b`, `r`, `q`, `k`)
    pub fn symbol(self) -> char {
        self.to_role().char()
    }

    /// Sort key for the captured-pieces tray: queens first, pawns last
    pub fn tray_order(self) -> u8 {
        match self {
            PieceKind::Queen => 0,
            PieceKind::Rook => 1,
            PieceKind::Bishop => 2,
            PieceKind::Knight => 3,
            PieceKind::Pawn => 4,
            PieceKind::King => 5,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub fn from_shakmaty(color: SColor) -> Self {
        match color {
            SColor::White => PieceColor::White,
            SColor::Black => PieceColor::Black,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// The rank a pawn of this color promotes on
    pub fn promotion_rank(self) -> Rank {
        match self {
            PieceColor::White => Rank::Eighth,
            PieceColor::Black => Rank::First,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl Piece {
    pub fn new(kind: PieceKind, color: PieceColor) -> Self {
        Self { kind, color }
    }

    /// Whether moving this piece onto `to` requires a promotion choice
    pub fn promotes_on(&self, to: Square) -> bool {
        self.kind == PieceKind::Pawn && to.rank() == self.color.promotion_rank()
    }

    pub fn svg_path(&self) -> &'static str {
        match (self.kind, self.color) {
            (PieceKind::Pawn, PieceColor::White) => "assets/pawn-white.svg",
            (PieceKind::Pawn, PieceColor::Black) => "assets/pawn-black.svg",
            (PieceKind::Rook, PieceColor::White) => "assets/rook-white.svg",
            (PieceKind::Rook, PieceColor::Black) => "assets/rook-black.svg",
            (PieceKind::Knight, PieceColor::White) => "assets/knight-white.svg",
            (PieceKind::Knight, PieceColor::Black) => "assets/knight-black.svg",
            (PieceKind::Bishop, PieceColor::White) => "assets/bishop-white.svg",
            (PieceKind::Bishop, PieceColor::Black) => "assets/bishop-black.svg",
            (PieceKind::Queen, PieceColor::White) => "assets/queen-white.svg",
            (PieceKind::Queen, PieceColor::Black) => "assets/queen-black.svg",
            (PieceKind::King, PieceColor::White) => "assets/king-white.svg",
            (PieceKind::King, PieceColor::Black) => "assets/king-black.svg",
        }
    }
}

/// Convert row/col (0-indexed, row 0 = rank 8) to shakmaty Square
pub fn to_square(row: usize, col: usize) -> Square {
    let file = File::new(col as u32);
    let rank = Rank::new(7 - row as u32); // row 0 = rank 8, row 7 = rank 1
    Square::from_coords(file, rank)
}

/// Convert shakmaty piece to our domain Piece
pub fn shakmaty_to_piece(piece: shakmaty::Piece) -> Piece {
    Piece {
        kind: PieceKind::from_role(piece.role),
        color: PieceColor::from_shakmaty(piece.color),
    }
}

/// Serde adapter writing squares by name (`"e4"`).
pub mod square_name {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};
    use shakmaty::Square;

    pub fn serialize<S: Serializer>(square: &Square, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(square)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Square, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse::<Square>()
            .map_err(|_| D::Error::custom(format!("invalid square `{name}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_square_orientation() {
        assert_eq!(to_square(0, 0), Square::A8);
        assert_eq!(to_square(7, 7), Square::H1);
        assert_eq!(to_square(6, 4), Square::E2);
        assert_eq!(to_square(0, 7), Square::H8);
    }

    #[test]
    fn test_promotion_rank_by_color() {
        let white_pawn = Piece::new(PieceKind::Pawn, PieceColor::White);
        let black_pawn = Piece::new(PieceKind::Pawn, PieceColor::Black);
        let white_rook = Piece::new(PieceKind::Rook, PieceColor::White);

        assert!(white_pawn.promotes_on(Square::B8));
        assert!(!white_pawn.promotes_on(Square::B1));
        assert!(black_pawn.promotes_on(Square::G1));
        assert!(!white_rook.promotes_on(Square::A8));
    }

    #[test]
    fn test_promotion_choices_exclude_king_and_pawn() {
        assert!(PieceKind::PROMOTION_CHOICES.contains(&PieceKind::Knight));
        assert!(!PieceKind::PROMOTION_CHOICES.contains(&PieceKind::King));
        assert!(!PieceKind::PROMOTION_CHOICES.contains(&PieceKind::Pawn));
    }

    #[test]
    fn test_symbols() {
        assert_eq!(PieceKind::Knight.symbol(), 'n');
        assert_eq!(PieceKind::Queen.symbol(), 'q');
    }
}
