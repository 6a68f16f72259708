mod board_view;
mod chess_app;
mod controls;
mod game_info;
mod move_list;
mod player_setup;

pub use chess_app::ChessAppView;
pub use controls::render_controls;
pub use game_info::render_game_info;
pub use move_list::render_move_list_panel;
