//! Entry points for hosts embedding this crate.
//!
//! Decode keys with [`get_recipient`] / [`get_recipients`], then encrypt
//! with [`encrypt_and_encode_message`].

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::core::cipher;
use crate::core::recipient::Recipient;
use crate::core::types::ArmoredMessage;
use crate::error::Result;

pub use crate::core::keyring::get_recipients;
pub use crate::core::recipient::{get_recipient, state_id};

/// Encrypt `message` to all recipients, as of now, and return the armored
/// OpenPGP message.
///
/// # Errors
///
/// See [`encrypt_and_encode_message_at`].
pub fn encrypt_and_encode_message(
    recipients: &[Recipient],
    message: &str,
) -> Result<ArmoredMessage> {
    encrypt_and_encode_message_at(recipients, message, Utc::now())
}

/// Encrypt `message` to all recipients whose keys are usable at `at`.
///
/// The empty-input and no-usable-key checks live in the OpenPGP backend
/// (`OpenPgp::encrypt_keyring`); an empty slice is passed through and
/// rejected there before anything is encrypted.
///
/// # Errors
///
/// - `CipherError::NoRecipients` if `recipients` is empty.
/// - `KeyError::Assembly` if a recipient cannot be added to the keyring.
/// - `CipherError::NoUsableKeys` if no recipient has a usable key at `at`.
pub fn encrypt_and_encode_message_at(
    recipients: &[Recipient],
    message: &str,
    at: DateTime<Utc>,
) -> Result<ArmoredMessage> {
    debug!(recipients = recipients.len(), "encrypting message");
    cipher::encrypt(message, recipients, at)
}
