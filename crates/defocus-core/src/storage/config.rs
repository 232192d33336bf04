//! TOML-based application configuration.
//!
//! Stores the user-tunable defaults the engine and CLI consume:
//! - default focus session length and kind
//! - default defocus activity length
//! - quick reset countdown length
//!
//! Configuration is stored at `~/.config/defocus/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;
use crate::quick_reset::DEFAULT_QUICK_RESET_SECS;
use crate::session::{FocusKind, DEFAULT_FOCUS_DURATION_MIN};

/// Focus session defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_focus_duration_min")]
    pub focus_duration_min: u32,
    #[serde(default)]
    pub default_kind: FocusKind,
}

/// Defocus activity defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefocusConfig {
    #[serde(default = "default_defocus_duration_min")]
    pub default_duration_min: u32,
}

/// Quick reset defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickResetConfig {
    #[serde(default = "default_quick_reset_secs")]
    pub duration_secs: u32,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/defocus/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub defocus: DefocusConfig,
    #[serde(default)]
    pub quick_reset: QuickResetConfig,
}

fn default_focus_duration_min() -> u32 {
    DEFAULT_FOCUS_DURATION_MIN
}
fn default_defocus_duration_min() -> u32 {
    10
}
fn default_quick_reset_secs() -> u32 {
    DEFAULT_QUICK_RESET_SECS
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            focus_duration_min: default_focus_duration_min(),
            default_kind: FocusKind::Pomodoro,
        }
    }
}

impl Default for DefocusConfig {
    fn default() -> Self {
        Self {
            default_duration_min: default_defocus_duration_min(),
        }
    }
}

impl Default for QuickResetConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_quick_reset_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            defocus: DefocusConfig::default(),
            quick_reset: QuickResetConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config"),
            message: format!("cannot create data directory: {e}"),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, writing defaults on first run.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Get a config value as a string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "session.focus_duration_min" => Some(self.session.focus_duration_min.to_string()),
            "session.default_kind" => Some(self.session.default_kind.to_string()),
            "defocus.default_duration_min" => {
                Some(self.defocus.default_duration_min.to_string())
            }
            "quick_reset.duration_secs" => Some(self.quick_reset.duration_secs.to_string()),
            _ => None,
        }
    }

    /// Set a config value by dot-separated key and persist it.
    ///
    /// # Errors
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "session.focus_duration_min" => {
                self.session.focus_duration_min = parse_u32(key, value)?;
            }
            "session.default_kind" => {
                self.session.default_kind =
                    value
                        .parse::<FocusKind>()
                        .map_err(|message| ConfigError::InvalidValue {
                            key: key.to_string(),
                            message,
                        })?;
            }
            "defocus.default_duration_min" => {
                self.defocus.default_duration_min = parse_u32(key, value)?;
            }
            "quick_reset.duration_secs" => {
                self.quick_reset.duration_secs = parse_u32(key, value)?;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        self.save()
    }
}

fn parse_u32(key: &str, value: &str) -> Result<u32, ConfigError> {
    value.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("cannot parse '{value}' as number"),
    })
}
