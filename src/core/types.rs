//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// An ASCII-armored OpenPGP public key block.
pub type ArmoredKey = String;

/// An ASCII-armored OpenPGP message.
pub type ArmoredMessage = String;

/// A recipient name, as listed in `.opengpg.toml`.
pub type RecipientName = String;

/// Path to an armored key file, relative to the config file.
pub type KeyPath = String;
