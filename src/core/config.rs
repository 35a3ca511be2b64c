//=========================================================================
// Engine Configuration
//=========================================================================
//
// JSON configuration loaded at startup.
//
// Layout mirrors the on-disk file:
// ```json
// {
//   "window":      { "title": "...", "width": 1280, "height": 720, "resizable": true },
//   "graphics":    { "vsync": true },
//   "performance": { "fps": 144 },
//   "audio":       { "music_volume": 0.5, "sound_volume": 0.5 },
//   "input_mappings": { "jump": ["J", "Space"], ... }
// }
// ```
//
// Every section and field is optional; anything missing falls back to
// the defaults below. A missing or unparsable file is an error only for
// the caller to decide on — `Config::default()` always works.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

//=== ConfigError =========================================================

/// Errors produced when loading or saving the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be opened, read or written.
    #[error("config file i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but is not valid JSON for this schema.
    #[error("config file parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

//=== Sections ============================================================

/// Window creation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Verdant".to_string(),
            width: 1280,
            height: 720,
            resizable: true,
        }
    }
}

/// Graphics settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphicsConfig {
    pub vsync: bool,
}

impl Default for GraphicsConfig {
    fn default() -> Self {
        Self { vsync: true }
    }
}

/// Frame pacing settings. `fps == 0` means uncapped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    pub fps: u32,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self { fps: 144 }
    }
}

/// Mixer volumes, each in `[0.0, 1.0]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub music_volume: f32,
    pub sound_volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            music_volume: 0.5,
            sound_volume: 0.5,
        }
    }
}

//=== Config ==============================================================

/// Full engine configuration.
///
/// Constructed from a JSON file via [`Config::load`] or from
/// [`Config::default`], which carries a playable set of input mappings
/// (WASD + arrows movement, J/Space jump, K/MouseLeft attack,
/// P/Escape pause).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub graphics: GraphicsConfig,
    pub performance: PerformanceConfig,
    pub audio: AudioConfig,
    pub input_mappings: HashMap<String, Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        let mut input_mappings = HashMap::new();
        let bind = |names: &[&str]| names.iter().map(|n| n.to_string()).collect::<Vec<_>>();
        input_mappings.insert("move_left".to_string(), bind(&["A", "Left"]));
        input_mappings.insert("move_right".to_string(), bind(&["D", "Right"]));
        input_mappings.insert("move_up".to_string(), bind(&["W", "Up"]));
        input_mappings.insert("move_down".to_string(), bind(&["S", "Down"]));
        input_mappings.insert("jump".to_string(), bind(&["J", "Space"]));
        input_mappings.insert("attack".to_string(), bind(&["K", "MouseLeft"]));
        input_mappings.insert("pause".to_string(), bind(&["P", "Escape"]));

        Self {
            window: WindowConfig::default(),
            graphics: GraphicsConfig::default(),
            performance: PerformanceConfig::default(),
            audio: AudioConfig::default(),
            input_mappings,
        }
    }
}

impl Config {
    //--- Loading / Saving -------------------------------------------------

    /// Loads the configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mut config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.sanitize();
        info!("loaded config file: {}", path.display());
        Ok(config)
    }

    /// Loads the configuration, falling back to defaults on any error.
    ///
    /// The error is logged; the engine keeps running with defaults. This
    /// is the path the app facade uses so a missing config file never
    /// prevents startup.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                error!("failed to load config {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        info!("saved config file: {}", path.display());
        Ok(())
    }

    //--- Accessors --------------------------------------------------------

    /// Action name → list of key/button names driving it.
    pub fn input_mappings(&self) -> &HashMap<String, Vec<String>> {
        &self.input_mappings
    }

    //--- Internal Helpers -------------------------------------------------

    /// Clamps out-of-range values loaded from disk.
    fn sanitize(&mut self) {
        for (label, volume) in [
            ("music_volume", &mut self.audio.music_volume),
            ("sound_volume", &mut self.audio.sound_volume),
        ] {
            if !(0.0..=1.0).contains(volume) {
                warn!("{} {} out of range, clamping to [0, 1]", label, volume);
                *volume = volume.clamp(0.0, 1.0);
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_playable() {
        let config = Config::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 720);
        assert!(config.window.resizable);
        assert_eq!(config.performance.fps, 144);
        assert_eq!(config.input_mappings["jump"], vec!["J", "Space"]);
        assert_eq!(config.input_mappings["pause"], vec!["P", "Escape"]);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{ "window": { "width": 640 } }"#)
            .expect("partial config should parse");
        assert_eq!(config.window.width, 640);
        // Everything unspecified keeps its default.
        assert_eq!(config.window.height, 720);
        assert!(config.graphics.vsync);
        assert!(config.input_mappings.contains_key("move_left"));
    }

    #[test]
    fn json_round_trip_preserves_values() {
        let mut config = Config::default();
        config.window.title = "Round Trip".to_string();
        config.performance.fps = 60;

        let json = serde_json::to_string(&config).expect("serialize");
        let back: Config = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(back.window.title, "Round Trip");
        assert_eq!(back.performance.fps, 60);
        assert_eq!(back.input_mappings, config.input_mappings);
    }

    #[test]
    fn out_of_range_volume_is_clamped_on_load() {
        let mut config: Config =
            serde_json::from_str(r#"{ "audio": { "music_volume": 3.5 } }"#).expect("parse");
        config.sanitize();
        assert_eq!(config.audio.music_volume, 1.0);
    }

    #[test]
    fn load_or_default_survives_missing_file() {
        let config = Config::load_or_default("/definitely/not/here.json");
        assert_eq!(config.window.width, 1280);
    }
}
