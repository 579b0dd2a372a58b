/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use super::Curve;

/// Fixed-size ECDSA signature, `r || s`, each half as wide as a private key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature(Vec<u8>);

impl Signature {
    /// `None` if `raw` does not have the curve's signature size.
    pub fn from_bytes(raw: &[u8], curve: &Curve) -> Option<Self> {
        if raw.len() != curve.signature_size() {
            return None;
        }
        Some(Self(raw.to_vec()))
    }

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

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::Signature;
    use crate::crypto::ellipticcurve::CurveRegistry;

    #[test]
    fn test_from_bytes_checks_size() {
        let registry = CurveRegistry::compiled();
        let curve = registry.by_index(0).unwrap();
        let raw = vec![7u8; curve.signature_size()];
        assert!(Signature::from_bytes(&raw, curve).is_some());
        assert!(Signature::from_bytes(&raw[1..], curve).is_none());
    }
}
