//! OpenPGP public key recipient.
//!
//! Decodes an ASCII-armored Transferable Public Key and exposes the handful
//! of read-only facts the rest of the crate needs: key ID, expiry at an
//! instant, and the primary identity's email.
//!
//! The decoded certificate is private to this type so the OpenPGP library
//! behind it can change without touching callers.

use std::io::Read;
use std::str::FromStr;
use std::time::SystemTime;

use base64::Engine;
use chrono::{DateTime, Utc};
use sequoia_openpgp as openpgp;
use openpgp::armor::{Kind, Reader, ReaderMode};
use openpgp::cert::amalgamation::key::ValidKeyAmalgamationIter;
use openpgp::cert::prelude::*;
use openpgp::cert::ValidCert;
use openpgp::packet::key;
use openpgp::parse::Parse;
use openpgp::policy::StandardPolicy;
use openpgp::types::RevocationStatus;
use openpgp::Cert;
use tracing::{debug, trace};

use crate::core::constants;
use crate::error::{KeyError, Result};

/// A decoded OpenPGP public key that messages can be encrypted to.
///
/// Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Recipient {
    cert: Cert,
}

impl Recipient {
    /// Decode an ASCII-armored public key block.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Decode` if the armor is missing or corrupt (bad
    /// base64, checksum mismatch), or the packet stream is not a single
    /// well-formed public key.
    pub fn from_armored(armored: &str) -> Result<Self> {
        trace!(input_len = armored.len(), "decoding public key");

        if !armored.contains(constants::PUBLIC_KEY_HEADER) {
            return Err(KeyError::Decode(format!(
                "missing armor header '{}'",
                constants::PUBLIC_KEY_HEADER
            ))
            .into());
        }

        let mut reader = Reader::from_bytes(
            armored.as_bytes(),
            ReaderMode::Tolerant(Some(Kind::PublicKey)),
        );
        let mut body = Vec::new();
        reader
            .read_to_end(&mut body)
            .map_err(|e| KeyError::Decode(format!("reading armor: {}", e)))?;
        verify_checksum(armored, &body)?;

        let cert = Cert::from_bytes(&body).map_err(|e| KeyError::Decode(format!("{:#}", e)))?;

        debug!(
            key_id = %cert.keyid(),
            userids = cert.userids().count(),
            subkeys = cert.keys().subkeys().count(),
            "public key decoded"
        );

        Ok(Self { cert })
    }

    /// Hex-encoded (lowercase) key ID of the primary key.
    ///
    /// For v4 keys this is the low 64 bits of the fingerprint.
    pub fn key_id(&self) -> String {
        self.cert.keyid().to_hex().to_lowercase()
    }

    /// Full fingerprint of the primary key, uppercase hex.
    pub fn fingerprint(&self) -> String {
        self.cert.fingerprint().to_hex()
    }

    /// When the primary key was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from(self.cert.primary_key().key().creation_time())
    }

    /// Expiration time of the primary key, as bound by the self-signature
    /// that is valid at `at`.
    ///
    /// `None` if the key never expires, or if no binding is valid at `at`
    /// (for example, `at` precedes the key's creation).
    pub fn expires_at(&self, at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let policy = StandardPolicy::new();
        let valid = self.cert.with_policy(&policy, SystemTime::from(at)).ok()?;
        valid
            .primary_key()
            .key_expiration_time()
            .map(DateTime::<Utc>::from)
    }

    /// Whether the key has expired at `at`.
    ///
    /// A key without an expiration time is never expired. The boundary is
    /// inclusive: a key expiring at `E` is expired at `E`.
    pub fn is_expired(&self, at: DateTime<Utc>) -> bool {
        self.expires_at(at).is_some_and(|expiry| expiry <= at)
    }

    /// Email of the primary User ID valid at `at`.
    ///
    /// Primary selection follows the standard OpenPGP rules (primary flag,
    /// then most recent binding, skipping revoked or invalid bindings).
    /// The key's own expiry does not hide its identity.
    pub fn primary_email(&self, at: DateTime<Utc>) -> Option<String> {
        let policy = StandardPolicy::new();
        let valid = self.cert.with_policy(&policy, SystemTime::from(at)).ok()?;
        let userid = valid.primary_userid().ok()?;
        let email = userid.userid().email2().ok().flatten()?;
        if email.is_empty() {
            return None;
        }
        Some(email.to_string())
    }

    /// Whether at least one key of this certificate can be encrypted to at
    /// `at`: valid under the standard policy, not revoked, alive, and
    /// flagged for encryption.
    pub fn can_encrypt(&self, at: DateTime<Utc>) -> bool {
        let policy = StandardPolicy::new();
        let Ok(valid) = self.cert.with_policy(&policy, SystemTime::from(at)) else {
            return false;
        };
        if let RevocationStatus::Revoked(_) = valid.revocation_status() {
            return false;
        }
        encryption_keys(&valid).next().is_some()
    }

    /// Whether the wrapped certificate carries any secret key material.
    pub(crate) fn has_secret(&self) -> bool {
        self.cert.is_tsk()
    }

    pub(crate) fn cert(&self) -> &Cert {
        &self.cert
    }
}

impl FromStr for Recipient {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_armored(s)
    }
}

/// Keys of `valid` that messages can be encrypted to.
pub(crate) fn encryption_keys<'a>(
    valid: &ValidCert<'a>,
) -> ValidKeyAmalgamationIter<'a, key::PublicParts, key::UnspecifiedRole> {
    valid
        .keys()
        .supported()
        .alive()
        .revoked(false)
        .for_transport_encryption()
        .for_storage_encryption()
}

const CRC24_INIT: u32 = 0x00B7_04CE;
const CRC24_POLY: u32 = 0x0186_4CFB;

/// CRC-24 of the armor body (RFC 4880, section 6.1).
fn crc24(data: &[u8]) -> u32 {
    let mut crc = CRC24_INIT;
    for &byte in data {
        crc ^= u32::from(byte) << 16;
        for _ in 0..8 {
            crc <<= 1;
            if crc & 0x0100_0000 != 0 {
                crc ^= CRC24_POLY;
            }
        }
    }
    crc & 0x00FF_FFFF
}

/// Check the armor checksum line, if there is one, against the decoded body.
///
/// The checksum is optional; a block without one is accepted.
fn verify_checksum(armored: &str, body: &[u8]) -> Result<()> {
    let last = armored
        .lines()
        .map(str::trim)
        .skip_while(|line| !line.starts_with(constants::PUBLIC_KEY_HEADER))
        .take_while(|line| !line.starts_with(constants::PUBLIC_KEY_FOOTER))
        .filter(|line| !line.is_empty())
        .last();
    let Some(encoded) = last.and_then(|line| line.strip_prefix('=')) else {
        return Ok(());
    };

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .ok()
        .filter(|bytes| bytes.len() == 3)
        .ok_or_else(|| KeyError::Decode(format!("malformed armor checksum '={}'", encoded)))?;
    let expected = u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]]);
    let actual = crc24(body);
    if actual != expected {
        return Err(KeyError::Decode(format!(
            "armor checksum mismatch: expected {:06x}, computed {:06x}",
            expected, actual
        ))
        .into());
    }
    Ok(())
}

/// Decode a single armored public key.
///
/// # Errors
///
/// Returns `KeyError::Decode` if the key cannot be decoded.
pub fn get_recipient(armored: &str) -> Result<Recipient> {
    Recipient::from_armored(armored)
}

/// Short, stable stand-in for an armored key: its key ID, or
/// [`constants::MALFORMED_KEY`] when it does not decode.
pub fn state_id(armored: &str) -> String {
    match Recipient::from_armored(armored) {
        Ok(recipient) => recipient.key_id(),
        Err(_) => constants::MALFORMED_KEY.to_string(),
    }
}
