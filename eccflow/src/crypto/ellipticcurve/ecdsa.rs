/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use sha2::{Digest as _, Sha256};

use super::{backend, Curve, Signature};
use crate::error::EccError;

pub const DIGEST_SIZE: usize = 32;

/// What actually gets signed. Normally a SHA-256 hash of the message.
pub type Digest = [u8; DIGEST_SIZE];

pub fn digest_message(message: &[u8]) -> Digest {
    let mut digest = [0u8; DIGEST_SIZE];
    digest.copy_from_slice(&Sha256::digest(message));
    digest
}

pub struct SignatureAgent;

impl SignatureAgent {
    pub fn sign(private_key: &[u8], digest: &Digest, curve: &Curve) -> Result<Signature, EccError> {
        if private_key.len() != curve.private_key_size() {
            return Err(EccError::Signing(format!(
                "{} private keys are {} bytes, got {}",
                curve.name,
                curve.private_key_size(),
                private_key.len()
            )));
        }

        let raw = backend::sign(curve, private_key, digest)?;
        Signature::from_bytes(&raw, curve).ok_or_else(|| {
            EccError::Signing(format!("backend returned a {} byte signature", raw.len()))
        })
    }

    /// Malformed keys or signatures simply do not verify.
    pub fn verify(public_key: &[u8], digest: &Digest, signature: &[u8], curve: &Curve) -> bool {
        if public_key.len() != curve.public_key_size() {
            log::debug!(
                "{}: public key has {} bytes, expected {}",
                curve.name,
                public_key.len(),
                curve.public_key_size()
            );
            return false;
        }
        if signature.len() != curve.signature_size() {
            log::debug!(
                "{}: signature has {} bytes, expected {}",
                curve.name,
                signature.len(),
                curve.signature_size()
            );
            return false;
        }
        backend::verify(curve, public_key, digest, signature)
    }
}

#[cfg(test)]
mod tests {
    use super::{digest_message, SignatureAgent};
    use crate::crypto::ellipticcurve::{CurveRegistry, KeyAgent, Signature};
    use crate::error::EccError;
    use crate::utils::bytes;

    #[test]
    fn test_sha256_digest() {
        assert_eq!(
            bytes::to_hex(&digest_message(b"hello")),
            "2CF24DBA5FB0A30E26E83B2AC5B9E29E1B161E5C1FA7425E73043362938B9824"
        );
    }

    #[test]
    fn test_sign_and_verify() {
        let mut agent = KeyAgent::unsecure(10);
        let digest = digest_message(b"a582e8c28249fe7d7990bfa0afebd2da");

        for curve in &CurveRegistry::compiled() {
            let pair = agent.generate(curve).unwrap();
            let sign = SignatureAgent::sign(pair.private_key(), &digest, curve).unwrap();
            assert_eq!(sign.len(), curve.signature_size());
            assert_eq!(Signature::from_bytes(sign.as_bytes(), curve), Some(sign.clone()));
            assert!(SignatureAgent::verify(
                pair.public_key(),
                &digest,
                sign.as_bytes(),
                curve
            ));
        }
    }

    #[test]
    fn test_wrong_digest_or_key_fails() {
        let mut agent = KeyAgent::unsecure(11);
        let digest = digest_message(b"hello");
        let other = digest_message(b"hellp");

        for curve in &CurveRegistry::compiled() {
            let pair = agent.generate(curve).unwrap();
            let stranger = agent.generate(curve).unwrap();
            let sign = SignatureAgent::sign(pair.private_key(), &digest, curve).unwrap();
            assert!(!SignatureAgent::verify(pair.public_key(), &other, sign.as_bytes(), curve));
            assert!(!SignatureAgent::verify(
                stranger.public_key(),
                &digest,
                sign.as_bytes(),
                curve
            ));
        }
    }

    #[test]
    fn test_tampered_signature_fails() {
        let mut agent = KeyAgent::unsecure(12);
        let digest = digest_message(b"hello");

        for curve in &CurveRegistry::compiled() {
            let pair = agent.generate(curve).unwrap();
            let sign = SignatureAgent::sign(pair.private_key(), &digest, curve).unwrap();
            for i in 0..sign.len() {
                let mut tampered = sign.as_bytes().to_vec();
                tampered[i] ^= 0x01;
                assert!(
                    !SignatureAgent::verify(pair.public_key(), &digest, &tampered, curve),
                    "{}: flipping byte {i} still verified",
                    curve.name
                );
            }
        }
    }

    #[test]
    fn test_malformed_inputs_do_not_verify() {
        let mut agent = KeyAgent::unsecure(13);
        let digest = digest_message(b"hello");

        for curve in &CurveRegistry::compiled() {
            let pair = agent.generate(curve).unwrap();
            let sign = SignatureAgent::sign(pair.private_key(), &digest, curve).unwrap();
            let public = pair.public_key();

            assert!(!SignatureAgent::verify(&public[1..], &digest, sign.as_bytes(), curve));
            assert!(!SignatureAgent::verify(public, &digest, &sign.as_bytes()[1..], curve));
            assert!(!SignatureAgent::verify(public, &digest, &[], curve));
            assert!(!SignatureAgent::verify(
                &vec![0u8; curve.public_key_size()],
                &digest,
                sign.as_bytes(),
                curve
            ));
            assert!(!SignatureAgent::verify(
                public,
                &digest,
                &vec![0u8; curve.signature_size()],
                curve
            ));
        }
    }

    #[test]
    fn test_sign_rejects_bad_private_key() {
        let registry = CurveRegistry::compiled();
        let curve = registry.by_index(0).unwrap();
        let digest = digest_message(b"hello");
        assert!(matches!(
            SignatureAgent::sign(&[1, 2, 3], &digest, curve),
            Err(EccError::Signing(_))
        ));
        assert!(matches!(
            SignatureAgent::sign(&vec![0u8; curve.private_key_size()], &digest, curve),
            Err(EccError::Signing(_))
        ));
    }
}
