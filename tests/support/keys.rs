//! Throwaway OpenPGP keys and a decryption helper.
//!
//! The crate under test only encrypts; decryption here is used to prove
//! ciphertext is readable by the matching secret key.

use std::io::Read;
use std::time::{Duration, SystemTime};

use sequoia_openpgp as openpgp;
use openpgp::cert::CertBuilder;
use openpgp::crypto::SessionKey;
use openpgp::packet::{PKESK, SKESK};
use openpgp::parse::stream::{
    DecryptionHelper, DecryptorBuilder, MessageStructure, VerificationHelper,
};
use openpgp::parse::Parse;
use openpgp::policy::{Policy, StandardPolicy};
use openpgp::serialize::SerializeInto;
use openpgp::types::SymmetricAlgorithm;
use openpgp::{Cert, Fingerprint, KeyHandle};

/// A generated key: the full secret certificate plus its armored public half.
pub struct TestKey {
    pub secret: Cert,
    pub armored: String,
}

impl TestKey {
    /// Cv25519 key with one User ID and no expiry.
    pub fn generate(userid: &str) -> Self {
        let (secret, _) = CertBuilder::general_purpose(None, Some(userid))
            .set_validity_period(None)
            .generate()
            .expect("failed to generate key");
        Self::from_secret(secret)
    }

    /// Key created at `created` that expires `validity` later.
    pub fn expiring(userid: &str, created: SystemTime, validity: Duration) -> Self {
        let (secret, _) = CertBuilder::general_purpose(None, Some(userid))
            .set_creation_time(created)
            .set_validity_period(validity)
            .generate()
            .expect("failed to generate key");
        Self::from_secret(secret)
    }

    fn from_secret(secret: Cert) -> Self {
        let armored = String::from_utf8(secret.armored().to_vec().expect("failed to armor key"))
            .expect("armored key is not UTF-8");
        Self { secret, armored }
    }

    /// Decrypt an armored message with this key's secret material.
    pub fn decrypt(&self, armored_message: &str) -> Option<String> {
        let policy = StandardPolicy::new();
        let helper = Helper {
            policy: &policy,
            secret: &self.secret,
        };
        let mut decryptor = DecryptorBuilder::from_bytes(armored_message.as_bytes())
            .ok()?
            .with_policy(&policy, None, helper)
            .ok()?;

        let mut plaintext = String::new();
        decryptor.read_to_string(&mut plaintext).ok()?;
        Some(plaintext)
    }
}

struct Helper<'a> {
    policy: &'a dyn Policy,
    secret: &'a Cert,
}

impl VerificationHelper for Helper<'_> {
    fn get_certs(&mut self, _ids: &[KeyHandle]) -> openpgp::Result<Vec<Cert>> {
        Ok(Vec::new())
    }

    fn check(&mut self, _structure: MessageStructure) -> openpgp::Result<()> {
        Ok(())
    }
}

impl DecryptionHelper for Helper<'_> {
    fn decrypt<D>(
        &mut self,
        pkesks: &[PKESK],
        _skesks: &[SKESK],
        sym_algo: Option<SymmetricAlgorithm>,
        mut decrypt: D,
    ) -> openpgp::Result<Option<Fingerprint>>
    where
        D: FnMut(SymmetricAlgorithm, &SessionKey) -> bool,
    {
        let keys = self
            .secret
            .keys()
            .unencrypted_secret()
            .with_policy(self.policy, None)
            .for_transport_encryption()
            .for_storage_encryption();

        for ka in keys {
            let mut pair = ka.key().clone().into_keypair()?;
            for pkesk in pkesks {
                if let Some((algo, session_key)) = pkesk.decrypt(&mut pair, sym_algo) {
                    if decrypt(algo, &session_key) {
                        return Ok(Some(self.secret.fingerprint()));
                    }
                }
            }
        }

        Err(openpgp::Error::MissingSessionKey("no matching secret key".into()).into())
    }
}
