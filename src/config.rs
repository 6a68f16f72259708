//! User settings, read from a JSON file at startup.
//!
//! The file is looked up at `$CHESS_BOARD_CONFIG`, falling back to
//! `chess-board.json` in the working directory. A missing file means
//! defaults; a broken one is logged and also means defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::PieceColor;

/// Environment variable overriding the settings file location
pub const CONFIG_ENV: &str = "CHESS_BOARD_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "chess-board.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Name shown for the white player
    pub white_name: String,
    /// Name shown for the black player
    pub black_name: String,
    /// Whether sound cues play at startup
    pub sound_enabled: bool,
    /// Master volume, 0.0 to 1.0
    pub master_volume: f32,
    /// Delay in milliseconds between a move sound and the check or game-over sound
    pub follow_up_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            white_name: "White".to_string(),
            black_name: "Black".to_string(),
            sound_enabled: true,
            master_volume: 1.0,
            follow_up_delay_ms: 100,
        }
    }
}

impl Settings {
    /// Load settings from the configured location, falling back to defaults
    pub fn load() -> Self {
        let path = config_path();
        if !path.exists() {
            info!(path = %path.display(), "no settings file, using defaults");
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(settings) => {
                info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(err) => {
                warn!("{err:#}; using default settings");
                Self::default()
            }
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid settings in {}", path.display()))
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let settings: Settings = serde_json::from_str(text)?;
        Ok(settings.normalized())
    }

    /// JSON schema of the settings file, pretty-printed
    pub fn schema_json() -> anyhow::Result<String> {
        let schema = schemars::schema_for!(Settings);
        serde_json::to_string_pretty(&schema).context("failed to serialize settings schema")
    }

    /// Names to prefill the player setup screen with
    pub fn player_names(&self) -> PlayerNames {
        PlayerNames::from_input(&self.white_name, &self.black_name)
    }

    pub fn follow_up_delay(&self) -> Duration {
        Duration::from_millis(self.follow_up_delay_ms)
    }

    /// Trim names (blank ones fall back to the defaults) and clamp the volume
    fn normalized(mut self) -> Self {
        let defaults = Self::default();
        let names = self.player_names();
        self.white_name = names.white;
        self.black_name = names.black;
        self.master_volume = if self.master_volume.is_finite() {
            self.master_volume.clamp(0.0, 1.0)
        } else {
            defaults.master_volume
        };
        self
    }
}

/// The two players of a game, as shown in the side panel
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerNames {
    pub white: String,
    pub black: String,
}

impl PlayerNames {
    /// Build from raw text fields; blank names fall back to the color name
    pub fn from_input(white: &str, black: &str) -> Self {
        Self {
            white: non_blank(white).unwrap_or_else(|| "White".to_string()),
            black: non_blank(black).unwrap_or_else(|| "Black".to_string()),
        }
    }

    pub fn name(&self, color: PieceColor) -> &str {
        match color {
            PieceColor::White => &self.white,
            PieceColor::Black => &self.black,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self::from_input("", "")
    }
}

fn non_blank(name: &str) -> Option<String> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_settings() {
        let settings =
            Settings::from_json(r#"{ "white_name": "Ada", "sound_enabled": false }"#).unwrap();
        assert_eq!(settings.white_name, "Ada");
        assert_eq!(settings.black_name, "Black");
        assert!(!settings.sound_enabled);
        assert_eq!(settings.follow_up_delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_names_are_trimmed_and_blank_falls_back() {
        let settings =
            Settings::from_json(r#"{ "white_name": "  Grace  ", "black_name": "   " }"#).unwrap();
        assert_eq!(settings.white_name, "Grace");
        assert_eq!(settings.black_name, "Black");
    }

    #[test]
    fn test_player_names_from_input() {
        let names = PlayerNames::from_input("  Ada ", "");
        assert_eq!(names.name(PieceColor::White), "Ada");
        assert_eq!(names.name(PieceColor::Black), "Black");
        assert_eq!(PlayerNames::from_input(" ", "\t"), PlayerNames::default());
    }

    #[test]
    fn test_settings_prefill_player_names() {
        let settings = Settings::from_json(r#"{ "black_name": "Grace" }"#).unwrap();
        assert_eq!(
            settings.player_names(),
            PlayerNames {
                white: "White".to_string(),
                black: "Grace".to_string(),
            }
        );
    }

    #[test]
    fn test_volume_is_clamped() {
        let settings = Settings::from_json(r#"{ "master_volume": 3.5 }"#).unwrap();
        assert_eq!(settings.master_volume, 1.0);
        let settings = Settings::from_json(r#"{ "master_volume": -1 }"#).unwrap();
        assert_eq!(settings.master_volume, 0.0);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(Settings::from_json(r#"{ "volume": 0.5 }"#).is_err());
        assert!(Settings::from_json("not json").is_err());
    }

    #[test]
    fn test_from_file_reports_missing_file() {
        let err = Settings::from_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read settings"));
    }

    #[test]
    fn test_schema_lists_fields() {
        let schema = Settings::schema_json().unwrap();
        assert!(schema.contains("white_name"));
        assert!(schema.contains("follow_up_delay_ms"));
    }
}
