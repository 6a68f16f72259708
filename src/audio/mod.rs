//! Sound feedback: synthesized tones and a background player.

pub mod player;
pub mod tone;

pub use player::{SoundPlayer, SoundSink};
pub use tone::SoundCue;
