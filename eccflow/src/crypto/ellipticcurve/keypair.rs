/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use zeroize::Zeroizing;

use super::{backend, Curve};
use crate::error::EccError;
use crate::rand::{EntropySource, OsEntropy, SeededEntropy};
use crate::utils::bytes;

/// Rejection sampling gives up after this many out-of-range scalars. For
/// every supported curve n is so close to 2^bits that hitting this limit
/// means the entropy source is broken.
pub const MAX_TRIES: usize = 64;

pub struct KeyPair {
    private_key: Zeroizing<Vec<u8>>,
    public_key: Vec<u8>,
}

impl KeyPair {
    pub fn private_key(&self) -> &[u8] {
        &self.private_key
    }
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &bytes::to_hex(&self.public_key))
            .finish_non_exhaustive()
    }
}

pub struct KeyAgent {
    rng: Box<dyn EntropySource>,
}

impl KeyAgent {
    pub fn urandom() -> Self {
        Self::with_source(Box::new(OsEntropy::new()))
    }

    /// Reproducible keys for tests.
    pub fn unsecure(seed: u64) -> Self {
        Self::with_source(Box::new(SeededEntropy::from_seed(seed)))
    }

    pub fn with_source(rng: Box<dyn EntropySource>) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self, curve: &Curve) -> Result<KeyPair, EccError> {
        let mut candidate = Zeroizing::new(vec![0u8; curve.private_key_size()]);

        for attempt in 1..=MAX_TRIES {
            self.rng.fill(&mut candidate)?;

            if !curve.is_valid_scalar(&bytes::to_ibig_be(&candidate)) {
                log::trace!("{}: scalar out of range, attempt {attempt}", curve.name);
                continue;
            }

            let public_key = backend::public_key(curve, &candidate)?;
            log::debug!("{}: generated key after {attempt} draw(s)", curve.name);
            return Ok(KeyPair {
                private_key: candidate,
                public_key,
            });
        }

        log::error!("{}: no valid scalar after {MAX_TRIES} draws", curve.name);
        Err(EccError::KeyGeneration(format!(
            "no valid scalar after {MAX_TRIES} draws"
        )))
    }

    /// Rebuilds a keypair from a stored private scalar.
    pub fn from_private(curve: &Curve, private_key: &[u8]) -> Result<KeyPair, EccError> {
        if private_key.len() != curve.private_key_size() {
            return Err(EccError::KeyGeneration(format!(
                "{} private keys are {} bytes, got {}",
                curve.name,
                curve.private_key_size(),
                private_key.len()
            )));
        }
        if !curve.is_valid_scalar(&bytes::to_ibig_be(private_key)) {
            return Err(EccError::KeyGeneration("scalar out of range".to_string()));
        }
        Ok(KeyPair {
            private_key: Zeroizing::new(private_key.to_vec()),
            public_key: backend::public_key(curve, private_key)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::{KeyAgent, MAX_TRIES};
    use crate::crypto::ellipticcurve::{Curve, CurveRegistry};
    use crate::error::EccError;
    use crate::rand::EntropySource;
    use crate::utils::bytes;

    struct Constant {
        byte: u8,
        draws: Rc<Cell<usize>>,
    }

    impl Constant {
        fn boxed(byte: u8) -> (Box<Self>, Rc<Cell<usize>>) {
            let draws = Rc::new(Cell::new(0));
            (Box::new(Self { byte, draws: draws.clone() }), draws)
        }
    }

    impl EntropySource for Constant {
        fn fill(&mut self, dest: &mut [u8]) -> Result<(), EccError> {
            self.draws.set(self.draws.get() + 1);
            dest.fill(self.byte);
            Ok(())
        }
    }

    struct Broken;

    impl EntropySource for Broken {
        fn fill(&mut self, _dest: &mut [u8]) -> Result<(), EccError> {
            Err(EccError::KeyGeneration("no entropy".to_string()))
        }
    }

    #[test]
    fn test_generate_sizes() {
        let mut agent = KeyAgent::urandom();
        for curve in &CurveRegistry::compiled() {
            let pair = agent.generate(curve).unwrap();
            assert_eq!(pair.private_key().len(), curve.private_key_size());
            assert_eq!(pair.public_key().len(), curve.public_key_size());
            let again = KeyAgent::from_private(curve, pair.private_key()).unwrap();
            assert_eq!(again.public_key(), pair.public_key());
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let registry = CurveRegistry::compiled();
        let curve = registry.by_index(0).unwrap();
        let a = KeyAgent::unsecure(10).generate(curve).unwrap();
        let b = KeyAgent::unsecure(10).generate(curve).unwrap();
        assert_eq!(a.private_key(), b.private_key());
    }

    #[test]
    fn test_zero_scalar_exhausts_retries() {
        let registry = CurveRegistry::compiled();
        let curve = registry.by_index(0).unwrap();
        let (source, draws) = Constant::boxed(0x00);
        let mut agent = KeyAgent::with_source(source);
        assert!(matches!(
            agent.generate(curve),
            Err(EccError::KeyGeneration(_))
        ));
        assert_eq!(draws.get(), MAX_TRIES);
    }

    #[test]
    fn test_entropy_failure() {
        let registry = CurveRegistry::compiled();
        let curve = registry.by_index(0).unwrap();
        let mut agent = KeyAgent::with_source(Box::new(Broken));
        assert!(matches!(
            agent.generate(curve),
            Err(EccError::KeyGeneration(_))
        ));
    }

    #[cfg(feature = "secp256r1")]
    #[test]
    fn test_scalar_above_order_is_rejected() {
        // 0xff.. is larger than the secp256r1 order
        let curve = Curve::secp256r1();
        let (source, draws) = Constant::boxed(0xff);
        let mut agent = KeyAgent::with_source(source);
        assert!(agent.generate(&curve).is_err());
        assert_eq!(draws.get(), MAX_TRIES);
        assert!(KeyAgent::from_private(&curve, &[0xff; 32]).is_err());
        assert!(KeyAgent::from_private(&curve, &[0x00; 32]).is_err());
        assert!(KeyAgent::from_private(&curve, &[0x01; 31]).is_err());
    }

    #[cfg(feature = "secp256r1")]
    #[test]
    fn test_private_key_one_is_generator() {
        let curve = Curve::secp256r1();
        let mut one = [0u8; 32];
        one[31] = 1;
        let pair = KeyAgent::from_private(&curve, &one).unwrap();
        assert_eq!(
            bytes::to_hex(pair.public_key()),
            "6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296\
             4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5"
        );
    }

    #[cfg(feature = "secp256k1")]
    #[test]
    fn test_private_key_one_is_generator_k1() {
        let curve = Curve::secp256k1();
        let mut one = [0u8; 32];
        one[31] = 1;
        let pair = KeyAgent::from_private(&curve, &one).unwrap();
        assert_eq!(
            bytes::to_hex(pair.public_key()),
            "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798\
             483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8"
        );
    }
}
