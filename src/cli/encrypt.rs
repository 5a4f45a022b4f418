//! Encrypt command.
//!
//! Reads recipient keys and a message, writes an armored OpenPGP message.

use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::debug;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::encryption;
use crate::core::types::ArmoredKey;
use crate::error::{KeyError, Result};

/// Encrypt a message.
///
/// Keys come from `keys` when given, otherwise from the config's recipients.
pub fn execute(
    keys: &[PathBuf],
    input: Option<&Path>,
    output_path: Option<&Path>,
    config: Option<&Path>,
) -> Result<()> {
    let armored: Vec<ArmoredKey> = if keys.is_empty() {
        let config = match config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        config
            .recipient_keys()?
            .into_iter()
            .map(|(_, key)| key)
            .collect()
    } else {
        read_keys(keys)?
    };

    let recipients = encryption::get_recipients(&armored)?;
    debug!(recipients = recipients.len(), "recipients loaded");

    let plaintext = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let at = Utc::now();
    let ciphertext = encryption::encrypt_and_encode_message_at(&recipients, &plaintext, at)?;

    match output_path {
        Some(path) => {
            std::fs::write(path, &ciphertext)?;

            let usable = recipients.iter().filter(|r| r.can_encrypt(at)).count();
            let skipped = recipients.len() - usable;
            let mut msg = format!(
                "encrypted for {} recipient{} → {}",
                usable,
                if usable == 1 { "" } else { "s" },
                path.display()
            );
            if skipped > 0 {
                msg.push_str(&format!(" ({} skipped: no usable key)", skipped));
            }
            output::success(&msg);
        }
        None => output::data(ciphertext.trim_end()),
    }

    Ok(())
}

/// Read armored key files, in argument order.
pub(crate) fn read_keys(paths: &[PathBuf]) -> Result<Vec<ArmoredKey>> {
    paths
        .iter()
        .map(|path| {
            std::fs::read_to_string(path).map_err(|error| {
                KeyError::Read {
                    path: path.display().to_string(),
                    error,
                }
                .into()
            })
        })
        .collect()
}
