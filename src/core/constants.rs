//! Constants used throughout opengpg.
//!
//! Centralizes magic strings and configuration values.

/// Configuration file name (.opengpg.toml).
pub const CONFIG_FILE: &str = ".opengpg.toml";

/// Armor header line of an OpenPGP public key block.
pub const PUBLIC_KEY_HEADER: &str = "-----BEGIN PGP PUBLIC KEY BLOCK-----";

/// Armor footer line of an OpenPGP public key block.
pub const PUBLIC_KEY_FOOTER: &str = "-----END PGP PUBLIC KEY BLOCK-----";

/// Armor header line of an OpenPGP message.
pub const MESSAGE_HEADER: &str = "-----BEGIN PGP MESSAGE-----";

/// Armor footer line of an OpenPGP message.
pub const MESSAGE_FOOTER: &str = "-----END PGP MESSAGE-----";

/// Placeholder recorded instead of a key ID when a key does not decode.
pub const MALFORMED_KEY: &str = "MALFORMED KEY";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "OPENGPG_LOG";
