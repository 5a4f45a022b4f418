//! opengpg - Encrypt messages to one or more OpenPGP public keys.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── encrypt       # Encrypt a message
//! │   ├── inspect       # Summarize key files
//! │   └── recipients    # List configured recipients
//! └── core/             # Core library components
//!     ├── recipient     # Armored key decoding, key ID, expiry, email
//!     ├── keyring       # Batch decoding and keyring assembly
//!     ├── cipher/       # Encryption backends
//!     │   ├── mod       # Cipher trait
//!     │   └── openpgp   # OpenPGP implementation
//!     ├── encryption    # Entry points for embedding hosts
//!     └── config        # .opengpg.toml management
//! ```
//!
//! # Example
//!
//! ```no_run
//! use opengpg::{encrypt_and_encode_message, get_recipients};
//!
//! # fn main() -> opengpg::error::Result<()> {
//! let keys = [std::fs::read_to_string("alice.asc")?];
//! let recipients = get_recipients(&keys)?;
//! let armored = encrypt_and_encode_message(&recipients, "hello world")?;
//! assert!(armored.starts_with("-----BEGIN PGP MESSAGE-----"));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::cipher::{is_pgp_message, Cipher, OpenPgp};
pub use crate::core::encryption::{
    encrypt_and_encode_message, encrypt_and_encode_message_at, get_recipient, get_recipients,
    state_id,
};
pub use crate::core::keyring::Keyring;
pub use crate::core::recipient::Recipient;
