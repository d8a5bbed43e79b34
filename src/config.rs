//! Bridge configuration loading and management.

use std::path::Path;

use mural_cmd::ImageFlags;
use serde::Deserialize;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown flag letter \"{0}\" in default flag set")]
    UnknownFlag(char),
}

/// Bridge configuration. Every field has a default, so an absent or
/// empty file yields a working bridge.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Command naming.
    pub command: CommandConfig,
    /// Default flag sets, as letter codes.
    pub flags: FlagDefaults,
}

/// Command naming configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CommandConfig {
    /// Canonical command name.
    pub name: String,
    /// Additional names the command is bound under.
    pub aliases: Vec<String>,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            name: "mural".to_string(),
            aliases: vec!["image".to_string(), "images".to_string()],
        }
    }
}

/// Default flag sets applied when a flags argument is omitted entirely.
/// `give` and `place` carry distinct defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FlagDefaults {
    /// Letter codes for `give` (e.g. `"ARD"`).
    pub give: String,
    /// Letter codes for `place` (e.g. `"AIR"`).
    pub place: String,
}

impl Default for FlagDefaults {
    fn default() -> Self {
        Self {
            give: ImageFlags::DEFAULT_GIVE.letters(),
            place: ImageFlags::DEFAULT_PLACE.letters(),
        }
    }
}

impl FlagDefaults {
    /// Decode the `give` default set.
    pub fn give_flags(&self) -> Result<ImageFlags, ConfigError> {
        ImageFlags::from_letters(&self.give).map_err(ConfigError::UnknownFlag)
    }

    /// Decode the `place` default set.
    pub fn place_flags(&self) -> Result<ImageFlags, ConfigError> {
        ImageFlags::from_letters(&self.place).map_err(ConfigError::UnknownFlag)
    }
}

impl BridgeConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: BridgeConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
