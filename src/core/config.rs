//! Configuration file management.
//!
//! Handles reading and validating `.opengpg.toml`, which names the
//! recipients a message is encrypted to when no keys are given explicitly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::types::{ArmoredKey, KeyPath, RecipientName};
use crate::error::{ConfigError, KeyError, Result};

/// Project configuration stored in `.opengpg.toml`
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Metadata about the configuration
    pub opengpg: Meta,
    /// Map of recipient names to armored public key files.
    ///
    /// Paths are resolved relative to the directory holding the config file.
    #[serde(default)]
    pub recipients: BTreeMap<RecipientName, KeyPath>,
    #[serde(skip)]
    base_dir: PathBuf,
}

/// Metadata section of the configuration
#[derive(Debug, Serialize, Deserialize)]
pub struct Meta {
    /// Configuration version
    pub version: String,
}

impl Config {
    /// Create a new empty configuration with current version
    pub fn new() -> Self {
        Self {
            opengpg: Meta {
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            recipients: BTreeMap::new(),
            base_dir: PathBuf::new(),
        }
    }

    /// Path to the configuration file in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load configuration from `.opengpg.toml` in the current directory.
    ///
    /// # Errors
    ///
    /// See [`Config::load_from`].
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist,
    /// `ConfigError::Parse` if the TOML is malformed, or a validation error.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        config.base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        debug!(recipients = config.recipients.len(), "config loaded");

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration structure and contents
    ///
    /// Checks:
    /// - Version field looks like semver
    /// - At least one recipient exists
    /// - Recipient names and key paths are non-empty
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` or `ConfigError::MissingField` on validation failure.
    pub fn validate(&self) -> Result<()> {
        debug!("validating config");

        if self.opengpg.version.is_empty() {
            return Err(ConfigError::MissingField { field: "version" }.into());
        }

        let version_parts: Vec<&str> = self.opengpg.version.split('.').collect();
        if version_parts.len() < 2 {
            return Err(ConfigError::InvalidValue {
                field: "version",
                reason: format!("not a valid semver: {}", self.opengpg.version),
            }
            .into());
        }

        if self.recipients.is_empty() {
            return Err(ConfigError::NoRecipients.into());
        }

        for (name, path) in &self.recipients {
            if name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "recipients",
                    reason: "empty recipient name".to_string(),
                }
                .into());
            }
            if path.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "recipients",
                    reason: format!("empty key path for recipient '{}'", name),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Resolve a recipient's key path against the config directory.
    pub fn key_path(&self, path: &str) -> PathBuf {
        self.base_dir.join(path)
    }

    /// Read every configured recipient's armored key, in name order.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Read` if a key file cannot be read.
    pub fn recipient_keys(&self) -> Result<Vec<(RecipientName, ArmoredKey)>> {
        self.recipients
            .iter()
            .map(|(name, path)| {
                let full = self.key_path(path);
                let armored =
                    std::fs::read_to_string(&full).map_err(|error| KeyError::Read {
                        path: full.display().to_string(),
                        error,
                    })?;
                Ok((name.clone(), armored))
            })
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
