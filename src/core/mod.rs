//! Core library components.
//!
//! Key decoding, keyring assembly, and OpenPGP encryption. Everything in
//! here is synchronous and in-memory; time is always passed in explicitly.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod encryption;
pub mod keyring;
pub mod recipient;
pub mod types;
