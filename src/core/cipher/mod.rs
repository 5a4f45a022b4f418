//! Cryptographic operations.
//!
//! Provides the encryption abstraction and its OpenPGP implementation.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file next to `openpgp.rs`
//! 3. Re-export from this module

use chrono::{DateTime, Utc};

use crate::core::recipient::Recipient;
use crate::error::Result;

mod openpgp;

pub use openpgp::{is_pgp_message, OpenPgp};

/// Cryptographic backend trait.
///
/// Abstracts one-way encryption so the OpenPGP library in use stays an
/// implementation detail.
pub trait Cipher {
    /// Type representing a recipient public key.
    type Recipient;

    /// Encrypt plaintext for multiple recipients.
    ///
    /// # Arguments
    ///
    /// * `plaintext` - The string to encrypt
    /// * `recipients` - Recipients the message is addressed to
    ///
    /// # Returns
    ///
    /// Encrypted string (format depends on backend implementation).
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if encryption fails.
    fn encrypt(&self, plaintext: &str, recipients: &[Self::Recipient]) -> Result<String>;

    /// Backend name for display.
    fn name(&self) -> &'static str;
}

/// Encrypt plaintext for every usable recipient, evaluating key validity
/// at `at`.
///
/// Builds the keyring and hands it to [`OpenPgp`]; the host entry points in
/// `core::encryption` go through here.
///
/// # Errors
///
/// Returns `CipherError::NoRecipients` for an empty slice and
/// `CipherError::NoUsableKeys` when no recipient has a valid encryption key
/// at `at`.
pub fn encrypt(plaintext: &str, recipients: &[Recipient], at: DateTime<Utc>) -> Result<String> {
    OpenPgp::at(at).encrypt(plaintext, recipients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::keyring::get_recipients;
    use crate::error::{CipherError, Error};
    use chrono::TimeZone;

    const CURVE: &str = include_str!("../../../tests/fixtures/keys/curve.asc");
    const CURVE_EXPIRED: &str = include_str!("../../../tests/fixtures/keys/curve_expired.asc");

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_encrypt_at_instant() {
        let recipients = get_recipients(&[CURVE_EXPIRED]).unwrap();

        let before = encrypt("hello world", &recipients, utc(2024, 9, 25, 0)).unwrap();
        assert!(is_pgp_message(&before));

        let err = encrypt("hello world", &recipients, utc(2024, 9, 25, 16)).unwrap_err();
        assert!(matches!(
            err,
            Error::Cipher(CipherError::NoUsableKeys { recipients: 1 })
        ));
    }

    #[test]
    fn test_encrypt_empty_recipients() {
        let err = encrypt("hello world", &[], utc(2026, 1, 1, 0)).unwrap_err();
        assert!(matches!(err, Error::Cipher(CipherError::NoRecipients)));
    }

    #[test]
    fn test_encrypt_mixed_recipients() {
        let recipients = get_recipients(&[CURVE_EXPIRED, CURVE]).unwrap();
        let encrypted = encrypt("hello world", &recipients, utc(2026, 1, 1, 0)).unwrap();
        assert!(is_pgp_message(&encrypted));
    }
}
