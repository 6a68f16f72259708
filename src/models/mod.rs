//! Application models: game state adapter and board interaction controller.

pub mod controller;
pub mod game;

pub use controller::{BoardController, InteractionState};
pub use game::GameModel;

use crate::audio::SoundPlayer;

/// The controller as the running application uses it
pub type ChessSession = BoardController<SoundPlayer>;
