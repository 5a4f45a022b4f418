//! Inspect command.
//!
//! Summarize public key files: key ID, fingerprint, expiry, primary email.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cli::encrypt::read_keys;
use crate::cli::output;
use crate::core::encryption;
use crate::core::recipient::Recipient;
use crate::error::Result;

/// What `inspect` and `recipients` report for one key.
#[derive(Debug, Serialize)]
pub struct KeySummary {
    pub label: String,
    pub key_id: String,
    pub fingerprint: String,
    pub created: DateTime<Utc>,
    pub expires: Option<DateTime<Utc>>,
    pub expired: bool,
    pub email: Option<String>,
}

impl KeySummary {
    pub fn new(label: impl Into<String>, recipient: &Recipient, at: DateTime<Utc>) -> Self {
        Self {
            label: label.into(),
            key_id: recipient.key_id(),
            fingerprint: recipient.fingerprint(),
            created: recipient.created_at(),
            expires: recipient.expires_at(at),
            expired: recipient.is_expired(at),
            email: recipient.primary_email(at),
        }
    }
}

/// Inspect key files.
pub fn execute(files: &[PathBuf], at: DateTime<Utc>, json: bool) -> Result<()> {
    let armored = read_keys(files)?;
    let recipients = encryption::get_recipients(&armored)?;

    let summaries: Vec<_> = files
        .iter()
        .zip(&recipients)
        .map(|(path, recipient)| KeySummary::new(path.display().to_string(), recipient, at))
        .collect();

    print(&summaries, at, json)
}

/// Print summaries as JSON or as labelled sections.
pub fn print(summaries: &[KeySummary], at: DateTime<Utc>, json: bool) -> Result<()> {
    if json {
        let result = serde_json::json!({
            "at": at,
            "keys": summaries,
            "count": summaries.len(),
        });
        output::data(&serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    for summary in summaries {
        output::section(&summary.label);
        output::kv("key id", output::key_id(&summary.key_id));
        output::kv("fingerprint", &summary.fingerprint);
        output::kv("created", summary.created.to_rfc3339());
        output::kv(
            "expires",
            summary
                .expires
                .map(|e| e.to_rfc3339())
                .unwrap_or_else(|| "never".to_string()),
        );
        output::kv("status", output::expiry_status(summary.expired));
        output::kv("email", summary.email.as_deref().unwrap_or("-"));
    }

    Ok(())
}
