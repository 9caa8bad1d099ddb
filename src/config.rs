//! Client configuration - environment variable parsing

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const FONT_CANDIDATES: [&str; 4] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Client configuration loaded from environment variables
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding `game_state.json` and `input.json`
    pub shared_dir: PathBuf,
    pub window_width: u32,
    pub window_height: u32,
    pub window_title: String,
    /// Frame-rate hint for the tick loop
    pub target_fps: u32,
    /// TTF used for HUD text; `None` disables text drawing
    pub font_path: Option<PathBuf>,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            shared_dir: PathBuf::from("shared"),
            window_width: 1280,
            window_height: 720,
            window_title: String::from("Rogue-like Prototype"),
            target_fps: 60,
            font_path: None,
            log_level: String::from("info"),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let target_fps = parse_or(&lookup, "GAME_TARGET_FPS", defaults.target_fps)?;
        if target_fps == 0 {
            return Err(ConfigError::Invalid {
                var: "GAME_TARGET_FPS",
                value: String::from("0"),
            });
        }

        let font_path = match lookup("GAME_FONT_PATH") {
            Some(path) => Some(PathBuf::from(path)),
            None => FONT_CANDIDATES
                .iter()
                .map(Path::new)
                .find(|path| path.exists())
                .map(Path::to_path_buf),
        };

        Ok(Self {
            shared_dir: lookup("GAME_SHARED_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.shared_dir),
            window_width: parse_or(&lookup, "GAME_WINDOW_WIDTH", defaults.window_width)?,
            window_height: parse_or(&lookup, "GAME_WINDOW_HEIGHT", defaults.window_height)?,
            window_title: lookup("GAME_WINDOW_TITLE").unwrap_or(defaults.window_title),
            target_fps,
            font_path,
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        None => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for environment variable {var}")]
    Invalid { var: &'static str, value: String },
}
