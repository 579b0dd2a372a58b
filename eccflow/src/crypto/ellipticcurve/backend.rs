/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 * Glue between the curve descriptors and the RustCrypto curve crates. All
 * byte strings crossing this boundary are fixed-size big-endian encodings:
 * scalars and shared secrets are `size` bytes, points and signatures are
 * `2 * size` bytes.
 *
 */

use super::curve::{Curve, CurveKind};
use crate::error::EccError;

fn sec1_uncompressed(point: &[u8]) -> Vec<u8> {
    let mut sec1 = Vec::with_capacity(point.len() + 1);
    sec1.push(0x04);
    sec1.extend_from_slice(point);
    sec1
}

macro_rules! rustcrypto_backend {
    ($module:ident, $krate:ident) => {
        mod $module {
            use ::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
            use ::elliptic_curve::sec1::ToEncodedPoint;
            use $krate::ecdsa::{Signature, SigningKey, VerifyingKey};
            use $krate::{PublicKey, SecretKey};

            use super::sec1_uncompressed;
            use crate::error::EccError;

            pub(super) fn public_key(private_key: &[u8]) -> Result<Vec<u8>, EccError> {
                let secret = SecretKey::from_slice(private_key)
                    .map_err(|e| EccError::KeyGeneration(e.to_string()))?;
                let point = secret.public_key().to_encoded_point(false);
                Ok(point.as_bytes()[1..].to_vec())
            }

            pub(super) fn sign(private_key: &[u8], digest: &[u8]) -> Result<Vec<u8>, EccError> {
                let key = SigningKey::from_slice(private_key)
                    .map_err(|e| EccError::Signing(e.to_string()))?;
                let signature: Signature = key
                    .sign_prehash(digest)
                    .map_err(|e| EccError::Signing(e.to_string()))?;
                Ok(signature.to_bytes().to_vec())
            }

            pub(super) fn verify(public_key: &[u8], digest: &[u8], signature: &[u8]) -> bool {
                let key = match VerifyingKey::from_sec1_bytes(&sec1_uncompressed(public_key)) {
                    Ok(key) => key,
                    Err(_) => return false,
                };
                let signature = match Signature::from_slice(signature) {
                    Ok(signature) => signature,
                    Err(_) => return false,
                };
                key.verify_prehash(digest, &signature).is_ok()
            }

            pub(super) fn shared_secret(
                peer_public: &[u8],
                private_key: &[u8],
            ) -> Result<Vec<u8>, EccError> {
                let secret = SecretKey::from_slice(private_key)
                    .map_err(|e| EccError::KeyAgreement(format!("private key: {e}")))?;
                let peer = PublicKey::from_sec1_bytes(&sec1_uncompressed(peer_public))
                    .map_err(|e| EccError::KeyAgreement(format!("peer public key: {e}")))?;
                let shared =
                    elliptic_curve::ecdh::diffie_hellman(secret.to_nonzero_scalar(), peer.as_affine());
                Ok(shared.raw_secret_bytes().to_vec())
            }
        }
    };
}

#[cfg(feature = "secp224r1")]
rustcrypto_backend!(secp224r1, p224);
#[cfg(feature = "secp256r1")]
rustcrypto_backend!(secp256r1, p256);
#[cfg(feature = "secp256k1")]
rustcrypto_backend!(secp256k1, k256);
#[cfg(feature = "secp384r1")]
rustcrypto_backend!(secp384r1, p384);

macro_rules! dispatch {
    ($curve:expr, $backend:ident => $call:expr) => {
        match $curve.kind {
            #[cfg(feature = "secp224r1")]
            CurveKind::Secp224r1 => {
                use self::secp224r1 as $backend;
                $call
            }
            #[cfg(feature = "secp256r1")]
            CurveKind::Secp256r1 => {
                use self::secp256r1 as $backend;
                $call
            }
            #[cfg(feature = "secp256k1")]
            CurveKind::Secp256k1 => {
                use self::secp256k1 as $backend;
                $call
            }
            #[cfg(feature = "secp384r1")]
            CurveKind::Secp384r1 => {
                use self::secp384r1 as $backend;
                $call
            }
        }
    };
}

/// Public point for an already range-checked private scalar.
pub(crate) fn public_key(curve: &Curve, private_key: &[u8]) -> Result<Vec<u8>, EccError> {
    dispatch!(curve, backend => backend::public_key(private_key))
}

/// Deterministic (RFC 6979) ECDSA over a prehashed message.
pub(crate) fn sign(curve: &Curve, private_key: &[u8], digest: &[u8]) -> Result<Vec<u8>, EccError> {
    dispatch!(curve, backend => backend::sign(private_key, digest))
}

pub(crate) fn verify(curve: &Curve, public_key: &[u8], digest: &[u8], signature: &[u8]) -> bool {
    dispatch!(curve, backend => backend::verify(public_key, digest, signature))
}

/// x coordinate of `private_key * peer_public`; rejects points off the curve.
pub(crate) fn shared_secret(
    curve: &Curve,
    peer_public: &[u8],
    private_key: &[u8],
) -> Result<Vec<u8>, EccError> {
    dispatch!(curve, backend => backend::shared_secret(peer_public, private_key))
}
