//! Error types.
//!
//! Each layer has its own enum; [`Error`] composes them so `?` works across
//! the crate and callers can still match on the precise failure.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures decoding public keys or assembling them into a keyring.
#[derive(Error, Debug)]
pub enum KeyError {
    /// The armored input is not a well-formed public key block.
    #[error("decoding public key: {0}")]
    Decode(String),

    /// A key in a batch failed to decode; `index` is 0-based.
    #[error("decoding public key #{index}: {error}")]
    Batch { index: usize, error: Box<KeyError> },

    /// A key file could not be read.
    #[error("failed to read key file {path}: {error}")]
    Read {
        path: String,
        error: std::io::Error,
    },

    /// A decoded key could not be added to the keyring.
    #[error("adding key to keyring (index {index}): {reason}")]
    Assembly { index: usize, reason: String },
}

impl KeyError {
    /// Index of the offending key, if the error came from a batch.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Decode(_) | Self::Read { .. } => None,
            Self::Batch { index, .. } | Self::Assembly { index, .. } => Some(*index),
        }
    }
}

/// Failures producing ciphertext.
#[derive(Error, Debug)]
pub enum CipherError {
    /// Encryption was attempted with an empty keyring.
    #[error("no recipients")]
    NoRecipients,

    /// Recipients were supplied, but none had a usable encryption key.
    #[error(
        "cannot encrypt a message: no valid encryption keys found among {recipients} recipient(s)"
    )]
    NoUsableKeys { recipients: usize },

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("armor failed: {0}")]
    ArmorFailed(String),
}

/// Failures loading `.opengpg.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config not found: {0}")]
    NotFound(String),

    #[error("failed to read config: {0}")]
    ReadFile(std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(toml::de::Error),

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("no recipients configured")]
    NoRecipients,
}

pub type Result<T> = std::result::Result<T, Error>;
