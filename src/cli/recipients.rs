//! Recipients command.
//!
//! List the recipients named in `.opengpg.toml`.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::cli::inspect::{self, KeySummary};
use crate::core::config::Config;
use crate::core::encryption;
use crate::error::Result;

/// List configured recipients.
pub fn execute(config: Option<&Path>, at: DateTime<Utc>, json: bool) -> Result<()> {
    let config = match config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let (names, armored): (Vec<_>, Vec<_>) = config.recipient_keys()?.into_iter().unzip();
    let recipients = encryption::get_recipients(&armored)?;

    let summaries: Vec<_> = names
        .into_iter()
        .zip(&recipients)
        .map(|(name, recipient)| KeySummary::new(name, recipient, at))
        .collect();

    inspect::print(&summaries, at, json)
}
