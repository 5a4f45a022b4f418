//! Test fixtures and constants.
//!
//! Real armored public keys. The `*_EXPIRED` keys were created on
//! 2024-09-24 with a one day validity period.

/// RSA 4096 key without expiry, `foo (foobar) <bar@foo.com>`.
pub const RSA: &str = include_str!("../fixtures/keys/rsa.asc");

/// Ed25519 + Cv25519 key without expiry, `<foo@bar-curve.com>`.
pub const CURVE: &str = include_str!("../fixtures/keys/curve.asc");

/// RSA key expiring 2024-09-25T09:21:17Z, `expired key <foo@coop.no>`.
pub const RSA_EXPIRED: &str = include_str!("../fixtures/keys/rsa_expired.asc");

/// Ed25519 + Cv25519 key expiring 2024-09-25T09:23:42Z, `<foo@coop.no>`.
pub const CURVE_EXPIRED: &str = include_str!("../fixtures/keys/curve_expired.asc");

pub const RSA_KEY_ID: &str = "4f54663daabdbaff";
pub const CURVE_KEY_ID: &str = "27076d92c444bc87";

/// Not armored at all.
pub const NOT_A_KEY: &str = "not valid message";

/// Armored, but the payload ("nope\n") is not an OpenPGP packet.
pub const BAD_PACKET_KEY: &str =
    "-----BEGIN PGP PUBLIC KEY BLOCK-----\n\nbm9wZQo=\n-----END PGP PUBLIC KEY BLOCK-----\n";

pub const MESSAGE: &str = "hello world";
