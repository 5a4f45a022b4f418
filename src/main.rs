//! opengpg - Encrypt messages to OpenPGP public keys.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use opengpg::cli::output;
use opengpg::cli::{execute, Cli};
use opengpg::core::constants;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("opengpg=debug")
        } else {
            EnvFilter::new("opengpg=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        let error_msg = e.to_string();
        let suggestion = match &e {
            opengpg::error::Error::Config(opengpg::error::ConfigError::NotFound(_)) => {
                Some("pass keys with --key, or create .opengpg.toml")
            }
            opengpg::error::Error::Cipher(opengpg::error::CipherError::NoUsableKeys { .. }) => {
                Some("run: opengpg inspect <key> to check expiry")
            }
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
