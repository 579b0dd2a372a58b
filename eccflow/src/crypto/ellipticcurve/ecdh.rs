/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use super::{backend, Curve};
use crate::error::EccError;

/// x coordinate of the agreed point, as wide as a private key.
pub struct SharedSecret(Zeroizing<Vec<u8>>);

impl SharedSecret {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for SharedSecret {
    fn from(secret: Vec<u8>) -> Self {
        Self(Zeroizing::new(secret))
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_slice().ct_eq(other.0.as_slice()).into()
    }
}

impl Eq for SharedSecret {}

impl std::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SharedSecret({} bytes)", self.0.len())
    }
}

pub struct EcdhAgent;

impl EcdhAgent {
    pub fn derive_shared(
        local_private: &[u8],
        peer_public: &[u8],
        curve: &Curve,
    ) -> Result<SharedSecret, EccError> {
        if local_private.len() != curve.private_key_size() {
            return Err(EccError::KeyAgreement(format!(
                "{} private keys are {} bytes, got {}",
                curve.name,
                curve.private_key_size(),
                local_private.len()
            )));
        }
        if peer_public.len() != curve.public_key_size() {
            return Err(EccError::KeyAgreement(format!(
                "{} public keys are {} bytes, got {}",
                curve.name,
                curve.public_key_size(),
                peer_public.len()
            )));
        }

        let secret = backend::shared_secret(curve, peer_public, local_private)?;
        log::debug!("{}: derived {} byte shared secret", curve.name, secret.len());
        Ok(SharedSecret::from(secret))
    }
}
