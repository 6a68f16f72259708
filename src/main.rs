mod app;
mod audio;
mod config;
mod domain;
mod models;
mod ui;

use gpui::{App, Application};
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::ui::FileAssets;

fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--print-config-schema") {
        println!("{}", Settings::schema_json()?);
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load();

    Application::new()
        .with_assets(FileAssets::new())
        .run(move |cx: &mut App| app::run(cx, settings));

    Ok(())
}
