//! Theme constants and colors for the chess UI.

use gpui::{Rgba, rgb};

// Layout constants
pub const BOARD_PADDING: f32 = 20.0;
pub const PIECE_SCALE: f32 = 0.98; // piece size relative to square
pub const LEGAL_DOT_SCALE: f32 = 0.3;
pub const CAPTURED_PIECE_SIZE: f32 = 20.0;

// Initial panel sizes
pub const INITIAL_LEFT_PANEL: f32 = 540.0;
pub const INITIAL_RIGHT_PANEL: f32 = 300.0;

// Board colors
pub const LIGHT_SQUARE: u32 = 0xEFD9B5;
pub const DARK_SQUARE: u32 = 0xB48764;
pub const SELECTED_SQUARE: u32 = 0x7FA650;
pub const LAST_MOVE_LIGHT: u32 = 0xF6EB72;
pub const LAST_MOVE_DARK: u32 = 0xDCC34B;
pub const CHECK_SQUARE: u32 = 0xE2504A;
pub const LEGAL_MARKER: u32 = 0x1e1e1e;

// Panel colors
pub const PANEL_BG: u32 = 0x2a2a2a;
pub const MOVE_LIST_BG: u32 = 0x1e1e1e;
pub const BORDER_COLOR: u32 = 0x4a4a4a;
pub const TEXT_PRIMARY: u32 = 0xffffff;
pub const TEXT_SECONDARY: u32 = 0x888888;
pub const ACTIVE_PLAYER_BG: u32 = 0x34405a;
pub const ACCENT: u32 = 0x4a6da7;
pub const STATUS_CHECK: u32 = 0xf87171;
pub const STATUS_GAME_OVER: u32 = 0xfbbf24;
pub const OVERLAY_BG: u32 = 0x000000aa;

/// Highlight state of a single square
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SquareHighlight {
    pub selected: bool,
    pub last_move: bool,
    pub in_check: bool,
}

/// Get the color for a board square based on its position
pub fn square_color(row: usize, col: usize) -> Rgba {
    if (row + col) % 2 == 0 {
        rgb(LIGHT_SQUARE)
    } else {
        rgb(DARK_SQUARE)
    }
}

/// Square color with selection, last move and check highlights applied
pub fn highlighted_square_color(row: usize, col: usize, highlight: SquareHighlight) -> Rgba {
    let is_light = (row + col) % 2 == 0;
    if highlight.in_check {
        rgb(CHECK_SQUARE)
    } else if highlight.selected {
        rgb(SELECTED_SQUARE)
    } else if highlight.last_move {
        rgb(if is_light { LAST_MOVE_LIGHT } else { LAST_MOVE_DARK })
    } else {
        square_color(row, col)
    }
}
