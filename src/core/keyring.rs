//! Recipient sets and keyrings.
//!
//! [`get_recipients`] decodes a batch of armored keys, stopping at the first
//! bad one. A [`Keyring`] groups decoded recipients for one encryption.

use tracing::{debug, trace};

use crate::core::recipient::Recipient;
use crate::error::{KeyError, Result};

/// Decode a list of armored public keys, in order.
///
/// An empty list yields an empty result.
///
/// # Errors
///
/// Returns `KeyError::Batch` carrying the 0-based index of the first key
/// that fails to decode. Nothing decoded so far is returned.
pub fn get_recipients<S: AsRef<str>>(armored_keys: &[S]) -> Result<Vec<Recipient>> {
    trace!(keys = armored_keys.len(), "decoding recipients");

    let mut recipients = Vec::with_capacity(armored_keys.len());
    for (index, armored) in armored_keys.iter().enumerate() {
        let recipient = Recipient::from_armored(armored.as_ref()).map_err(|e| match e {
            crate::error::Error::Key(error) => KeyError::Batch {
                index,
                error: Box::new(error),
            }
            .into(),
            other => other,
        })?;
        recipients.push(recipient);
    }

    debug!(recipients = recipients.len(), "recipients decoded");
    Ok(recipients)
}

/// An in-memory group of recipients targeted by one encryption.
///
/// Duplicates are kept; each one is considered when encrypting.
#[derive(Debug, Default, Clone)]
pub struct Keyring<'a> {
    members: Vec<&'a Recipient>,
}

impl<'a> Keyring<'a> {
    /// Create an empty keyring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a keyring from every recipient in `recipients`.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Assembly` with the index of the first recipient
    /// that cannot be added.
    pub fn from_recipients(recipients: &'a [Recipient]) -> Result<Self> {
        let mut keyring = Self::new();
        for recipient in recipients {
            keyring.add(recipient)?;
        }
        Ok(keyring)
    }

    /// Add a recipient.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Assembly` if the recipient's certificate carries
    /// secret key material. Keyrings hold public keys only.
    pub fn add(&mut self, recipient: &'a Recipient) -> Result<()> {
        let index = self.members.len();
        if recipient.has_secret() {
            return Err(KeyError::Assembly {
                index,
                reason: format!("key {} contains secret key material", recipient.key_id()),
            }
            .into());
        }

        trace!(index, key_id = %recipient.key_id(), "adding key to keyring");
        self.members.push(recipient);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate over members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Recipient> + '_ {
        self.members.iter().copied()
    }

    /// Key IDs of all members, in insertion order.
    pub fn key_ids(&self) -> Vec<String> {
        self.members.iter().map(|r| r.key_id()).collect()
    }
}
