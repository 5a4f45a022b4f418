//! OpenPGP encryption backend.
//!
//! Encrypts to every usable encryption-capable key of every recipient and
//! emits an ASCII-armored OpenPGP message. Key usability (policy, expiry,
//! revocation, algorithm support) is evaluated at a fixed instant.

use std::io::Write;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use sequoia_openpgp::armor;
use sequoia_openpgp::cert::prelude::*;
use sequoia_openpgp::parse::Parse;
use sequoia_openpgp::policy::StandardPolicy;
use sequoia_openpgp::serialize::stream::{Armorer, Encryptor2, LiteralWriter, Message};
use sequoia_openpgp::types::RevocationStatus;
use tracing::{debug, trace};

use super::Cipher;
use crate::core::constants;
use crate::core::keyring::Keyring;
use crate::core::recipient::{encryption_keys, Recipient};
use crate::core::types::ArmoredMessage;
use crate::error::{CipherError, Result};

/// OpenPGP cipher backend.
#[derive(Debug, Clone, Copy)]
pub struct OpenPgp {
    at: DateTime<Utc>,
}

impl OpenPgp {
    /// Backend evaluating key validity at `at`.
    pub fn at(at: DateTime<Utc>) -> Self {
        Self { at }
    }

    /// Backend evaluating key validity at the current time.
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    /// The instant key validity is evaluated at.
    pub fn time(&self) -> DateTime<Utc> {
        self.at
    }

    /// Encrypt plaintext to all usable keys in a keyring.
    ///
    /// # Errors
    ///
    /// - `CipherError::NoRecipients` if the keyring is empty. Nothing is
    ///   handed to the OpenPGP library in that case.
    /// - `CipherError::NoUsableKeys` if the keyring has members but none of
    ///   them has an encryption key that is valid at the configured instant.
    /// - `CipherError::EncryptionFailed` / `ArmorFailed` if the message
    ///   cannot be produced.
    pub fn encrypt_keyring(
        &self,
        keyring: &Keyring<'_>,
        plaintext: &str,
    ) -> Result<ArmoredMessage> {
        trace!(
            recipients = keyring.len(),
            plaintext_len = plaintext.len(),
            at = %self.at,
            "encrypting"
        );

        if keyring.is_empty() {
            return Err(CipherError::NoRecipients.into());
        }

        let policy = StandardPolicy::new();
        let time = SystemTime::from(self.at);

        let mut keys = Vec::new();
        for recipient in keyring.iter() {
            let valid = match recipient.cert().with_policy(&policy, time) {
                Ok(valid) => valid,
                Err(e) => {
                    debug!(key_id = %recipient.key_id(), error = %e, "key not valid, skipping");
                    continue;
                }
            };

            if let RevocationStatus::Revoked(_) = valid.revocation_status() {
                debug!(key_id = %recipient.key_id(), "key revoked, skipping");
                continue;
            }

            let before = keys.len();
            keys.extend(encryption_keys(&valid));
            if keys.len() == before {
                debug!(key_id = %recipient.key_id(), "no usable encryption key");
            }
        }

        if keys.is_empty() {
            return Err(CipherError::NoUsableKeys {
                recipients: keyring.len(),
            }
            .into());
        }
        debug!(keys = keys.len(), "encryption keys selected");

        let mut sink = Vec::new();
        let message = Message::new(&mut sink);
        let message = Armorer::new(message)
            .kind(armor::Kind::Message)
            .build()
            .map_err(|e| CipherError::ArmorFailed(format!("{:#}", e)))?;
        let message = Encryptor2::for_recipients(message, keys)
            .build()
            .map_err(|e| CipherError::EncryptionFailed(format!("creating encrypter: {:#}", e)))?;
        let mut writer = LiteralWriter::new(message)
            .build()
            .map_err(|e| CipherError::EncryptionFailed(format!("encrypting message: {:#}", e)))?;

        writer.write_all(plaintext.as_bytes()).map_err(|e| {
            CipherError::EncryptionFailed(format!("writing content to buffer: {}", e))
        })?;
        writer.finalize().map_err(|e| {
            CipherError::EncryptionFailed(format!("closing encrypted message: {:#}", e))
        })?;

        trace!(ciphertext_len = sink.len(), "encrypted");

        String::from_utf8(sink)
            .map_err(|e| CipherError::EncryptionFailed(format!("UTF-8 error: {}", e)).into())
    }
}

impl Default for OpenPgp {
    fn default() -> Self {
        Self::now()
    }
}

impl Cipher for OpenPgp {
    type Recipient = Recipient;

    fn name(&self) -> &'static str {
        "openpgp"
    }

    fn encrypt(&self, plaintext: &str, recipients: &[Recipient]) -> Result<String> {
        let keyring = Keyring::from_recipients(recipients)?;
        debug!(key_ids = ?keyring.key_ids(), "keyring assembled");
        self.encrypt_keyring(&keyring, plaintext)
    }
}

/// Whether `text` is an ASCII-armored, structurally valid OpenPGP message.
///
/// Encrypted contents are not decrypted; only the packet grammar is checked.
pub fn is_pgp_message(text: &str) -> bool {
    if !text.trim_start().starts_with(constants::MESSAGE_HEADER) {
        return false;
    }
    let reader = armor::Reader::from_bytes(
        text.as_bytes(),
        armor::ReaderMode::Tolerant(Some(armor::Kind::Message)),
    );
    sequoia_openpgp::Message::from_reader(reader).is_ok()
}
