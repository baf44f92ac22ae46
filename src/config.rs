//! Configuration management for livejump
//!
//! Settings live in a TOML file. Every field has a default, so a missing or
//! empty file is a valid configuration:
//!
//! ```toml
//! [seek_minutes]
//! short = 10
//! medium = 30
//! long = 60
//!
//! [jump]
//! auto_yesterday = true
//! timezone = "Europe/Amsterdam"
//! anchor = "live-edge"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::player::Anchor;
use crate::time::DEFAULT_TIMEZONE;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "LIVEJUMP_CONFIG";

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unknown timezone '{0}' (expected an IANA name such as Europe/Amsterdam)")]
    UnknownTimezone(String),
}

/// Step sizes in minutes for the short, medium and long seek shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeekMinutes {
    pub short: u32,
    pub medium: u32,
    pub long: u32,
}

impl Default for SeekMinutes {
    fn default() -> Self {
        Self {
            short: 10,
            medium: 30,
            long: 60,
        }
    }
}

impl SeekMinutes {
    /// Create step sizes; a zero falls back to that step's default.
    pub fn new(short: u32, medium: u32, long: u32) -> Self {
        Self {
            short,
            medium,
            long,
        }
        .sanitized()
    }

    /// Replace zero steps with their defaults.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let pick = |value: u32, fallback: u32| if value == 0 { fallback } else { value };
        Self {
            short: pick(self.short, defaults.short),
            medium: pick(self.medium, defaults.medium),
            long: pick(self.long, defaults.long),
        }
    }
}

/// Settings for wall-clock time jumps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpConfig {
    /// Read a time later than now as yesterday's occurrence
    pub auto_yesterday: bool,
    /// IANA zone the stream's wall-clock times are given in
    pub timezone: String,
    /// Media position jumps are measured from
    pub anchor: Anchor,
}

impl Default for JumpConfig {
    fn default() -> Self {
        Self {
            auto_yesterday: true,
            timezone: DEFAULT_TIMEZONE.name().to_string(),
            anchor: Anchor::LiveEdge,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub seek_minutes: SeekMinutes,
    pub jump: JumpConfig,
}

impl Config {
    /// Default config file location.
    ///
    /// `$LIVEJUMP_CONFIG` if set, otherwise `<config dir>/livejump/config.toml`.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("livejump").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from `path`, using defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config file at {}; using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parse TOML, falling back to defaults for zero seek steps.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(content)?;
        let sanitized = config.seek_minutes.sanitized();
        if sanitized != config.seek_minutes {
            tracing::warn!("seek_minutes contains 0; using defaults for those steps");
            config.seek_minutes = sanitized;
        }
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, self.to_toml()?).map_err(write_err)
    }

    /// The configured reference timezone.
    pub fn timezone(&self) -> Result<Tz, ConfigError> {
        self.jump
            .timezone
            .parse()
            .map_err(|_| ConfigError::UnknownTimezone(self.jump.timezone.clone()))
    }

    /// Non-fatal issues worth showing to the user.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Err(e) = self.timezone() {
            warnings.push(e.to_string());
        }

        let m = &self.seek_minutes;
        if !(m.short <= m.medium && m.medium <= m.long) {
            warnings.push(format!(
                "seek_minutes are not ascending (short={}, medium={}, long={})",
                m.short, m.medium, m.long
            ));
        }

        warnings
    }
}
