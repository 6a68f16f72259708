//! Application setup and window creation.

use gpui::{App, Bounds, WindowBounds, WindowOptions, prelude::*, px, size};
use gpui_component::Root;
use tracing::error;

use crate::audio::SoundPlayer;
use crate::config::Settings;
use crate::models::{BoardController, GameModel};
use crate::ui::views::ChessAppView;

/// Initialize and run the chess application
pub fn run(cx: &mut App, settings: Settings) {
    gpui_component::init(cx);

    // One game session per window
    let sounds = SoundPlayer::spawn(settings.sound_enabled, settings.master_volume);
    let follow_up_delay = settings.follow_up_delay();
    let session = cx.new(|_| BoardController::new(GameModel::new(), sounds, follow_up_delay));

    let bounds = Bounds::centered(None, size(px(900.0), px(620.0)), cx);
    let opened = cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        },
        |window, cx| {
            let prefill = settings.player_names();
            let view = cx.new(|cx| ChessAppView::new(session, prefill, window, cx));
            cx.new(|cx| Root::new(view, window, cx))
        },
    );

    if let Err(err) = opened {
        error!("failed to open window: {err:#}");
        cx.quit();
    }
}
