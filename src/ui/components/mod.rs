mod piece;
mod promotion;
mod square;

pub use piece::{render_piece, render_piece_icon};
pub use promotion::render_promotion_overlay;
pub use square::render_square;
