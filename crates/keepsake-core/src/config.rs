//! Process-wide configuration for Keepsake.
//!
//! Configuration is loaded once at startup and passed down explicitly to the
//! engines and the host shell. Nothing reads the environment after that.
//!
//! # Storage Structure
//!
//! ```text
//! ~/.keepsake/
//! ├── .env.local         # Optional settings (map token, theme, ...)
//! └── repl_history.txt   # REPL history
//! ```
//!
//! # Environment Variables
//!
//! - `KEEPSAKE_STATE_DIR`: Override the state directory
//! - `KEEPSAKE_THEME`: `light` or `dark`
//! - `KEEPSAKE_MAP_TOKEN`: Map provider access token
//! - `KEEPSAKE_UTC_OFFSET`: Display zone used for dates and years (`+HH:MM`)
//! - `KEEPSAKE_AMBIENT_SECS`: Seconds each memory stays on screen in ambient mode
//! - `KEEPSAKE_NARRATION_RATE`: Speech rate handed to the narration collaborator

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use chrono::{FixedOffset, Offset, Utc};
use tracing::debug;

use crate::error::{GalleryError, Result};
use crate::views::narration::NarrationSettings;

/// Environment variable for custom state directory.
pub const STATE_DIR_ENV: &str = "KEEPSAKE_STATE_DIR";

/// Environment variable for the color theme.
pub const THEME_ENV: &str = "KEEPSAKE_THEME";

/// Environment variable for the map provider token.
pub const MAP_TOKEN_ENV: &str = "KEEPSAKE_MAP_TOKEN";

/// Environment variable for the display zone.
pub const UTC_OFFSET_ENV: &str = "KEEPSAKE_UTC_OFFSET";

/// Environment variable for the ambient slideshow interval.
pub const AMBIENT_SECS_ENV: &str = "KEEPSAKE_AMBIENT_SECS";

/// Environment variable for the narration speech rate.
pub const NARRATION_RATE_ENV: &str = "KEEPSAKE_NARRATION_RATE";

/// Default state directory name under home.
const DEFAULT_STATE_DIR: &str = ".keepsake";

/// Seconds per memory in ambient mode.
pub const DEFAULT_AMBIENT_SECS: u64 = 15;

/// Color theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl FromStr for Theme {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(GalleryError::InvalidConfig(
                THEME_ENV.to_string(),
                format!("'{}' is not a theme (expected light or dark)", other),
            )),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// Holds all configuration loaded at startup.
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    pub state_dir: PathBuf,
    pub theme: Theme,
    pub map_token: Option<String>,
    /// Zone used to render dates and extract calendar years.
    pub display_offset: FixedOffset,
    pub ambient_interval: Duration,
    pub narration: NarrationSettings,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            state_dir: default_state_dir(),
            theme: Theme::default(),
            map_token: None,
            display_offset: utc(),
            ambient_interval: Duration::from_secs(DEFAULT_AMBIENT_SECS),
            narration: NarrationSettings::default(),
        }
    }
}

impl GalleryConfig {
    /// Loads configuration from `.env.local` in the state directory and the
    /// process environment.
    ///
    /// `state_dir` overrides both `KEEPSAKE_STATE_DIR` and the default.
    pub fn load(state_dir: Option<&Path>) -> Result<Self> {
        let dir = state_dir
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(STATE_DIR_ENV).ok().map(PathBuf::from))
            .unwrap_or_else(default_state_dir);

        let env_path = dir.join(".env.local");
        if env_path.exists() {
            let _ = dotenvy::from_path(&env_path);
            debug!(path = %env_path.display(), "Loaded environment file");
        }

        let mut config = Self::from_lookup(|key| std::env::var(key).ok())?;
        config.state_dir = dir;
        Ok(config)
    }

    /// Builds configuration from a key lookup function.
    ///
    /// Missing keys fall back to defaults; present but malformed values are
    /// errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(STATE_DIR_ENV) {
            config.state_dir = PathBuf::from(dir);
        }

        if let Some(theme) = lookup(THEME_ENV) {
            config.theme = theme.parse()?;
        }

        config.map_token = lookup(MAP_TOKEN_ENV)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        if let Some(offset) = lookup(UTC_OFFSET_ENV) {
            config.display_offset = parse_offset(&offset)?;
        }

        if let Some(secs) = lookup(AMBIENT_SECS_ENV) {
            let secs = secs.trim().parse::<u64>().ok().filter(|s| *s > 0).ok_or_else(|| {
                GalleryError::InvalidConfig(
                    AMBIENT_SECS_ENV.to_string(),
                    format!("'{}' is not a positive number of seconds", secs),
                )
            })?;
            config.ambient_interval = Duration::from_secs(secs);
        }

        if let Some(rate) = lookup(NARRATION_RATE_ENV) {
            let rate = rate.trim().parse::<f32>().ok().filter(|r| *r > 0.0).ok_or_else(|| {
                GalleryError::InvalidConfig(
                    NARRATION_RATE_ENV.to_string(),
                    format!("'{}' is not a positive rate", rate),
                )
            })?;
            config.narration.rate = rate;
        }

        Ok(config)
    }

    /// Path of the REPL history file.
    pub fn history_file(&self) -> PathBuf {
        self.state_dir.join("repl_history.txt")
    }
}

/// Default state directory: `~/.keepsake`, or `.keepsake` without a home.
pub fn default_state_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(DEFAULT_STATE_DIR))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR))
}

fn utc() -> FixedOffset {
    Utc.fix()
}

/// Parses a UTC offset such as `+02:00`, `-0530`, `+9`, `Z` or `UTC`.
pub fn parse_offset(value: &str) -> Result<FixedOffset> {
    let invalid = || {
        GalleryError::InvalidConfig(
            UTC_OFFSET_ENV.to_string(),
            format!("'{}' is not a UTC offset like +02:00", value),
        )
    };

    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
        return Ok(utc());
    }

    let (sign, rest) = match trimmed.chars().next() {
        Some('+') => (1, &trimmed[1..]),
        Some('-') => (-1, &trimmed[1..]),
        _ => return Err(invalid()),
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let (hours, minutes) = match digits.len() {
        1 | 2 => (digits.parse::<i32>().map_err(|_| invalid())?, 0),
        4 => (
            digits[..2].parse::<i32>().map_err(|_| invalid())?,
            digits[2..].parse::<i32>().map_err(|_| invalid())?,
        ),
        _ => return Err(invalid()),
    };

    if minutes >= 60 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}
