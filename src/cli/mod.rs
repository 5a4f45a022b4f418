//! Command-line interface.

pub mod encrypt;
pub mod inspect;
pub mod output;
pub mod recipients;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

/// opengpg - Encrypt messages to OpenPGP public keys.
#[derive(Parser)]
#[command(
    name = "opengpg",
    about = "Encrypt messages to one or more OpenPGP public keys",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Encrypt a message to every usable recipient key
    Encrypt {
        /// Armored public key file (repeatable). Defaults to the recipients in .opengpg.toml
        #[arg(short, long = "key", value_name = "FILE")]
        keys: Vec<PathBuf>,
        /// Read the message from FILE instead of stdin
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Write the armored ciphertext to FILE instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Config file listing recipients
        #[arg(short, long, value_name = "PATH", env = "OPENGPG_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Show key ID, expiry and primary email of public key files
    Inspect {
        /// Armored public key files
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Evaluate expiry and identity at this instant (RFC 3339); defaults to now
        #[arg(long)]
        at: Option<DateTime<Utc>>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the recipients configured in .opengpg.toml
    Recipients {
        /// Config file listing recipients
        #[arg(short, long, value_name = "PATH", env = "OPENGPG_CONFIG")]
        config: Option<PathBuf>,
        /// Evaluate expiry and identity at this instant (RFC 3339); defaults to now
        #[arg(long)]
        at: Option<DateTime<Utc>>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Encrypt {
            keys,
            input,
            output,
            config,
        } => encrypt::execute(&keys, input.as_deref(), output.as_deref(), config.as_deref()),
        Inspect { files, at, json } => inspect::execute(&files, at.unwrap_or_else(Utc::now), json),
        Recipients { config, at, json } => {
            recipients::execute(config.as_deref(), at.unwrap_or_else(Utc::now), json)
        }
    }
}
