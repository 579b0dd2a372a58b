/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use ibig::{ibig, IBig};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurveKind {
    #[cfg(feature = "secp224r1")]
    Secp224r1,
    #[cfg(feature = "secp256r1")]
    Secp256r1,
    #[cfg(feature = "secp256k1")]
    Secp256k1,
    #[cfg(feature = "secp384r1")]
    Secp384r1,
}

#[derive(Clone, Debug)]
pub struct Curve {
    pub name: &'static str,
    pub kind: CurveKind,
    pub n: IBig, // prime order of the base point
    size: usize, // bytes per scalar / coordinate
}

impl Curve {
    #[cfg(feature = "secp224r1")]
    pub fn secp224r1() -> Self {
        Curve {
            name: "secp224r1",
            kind: CurveKind::Secp224r1,
            n: ibig!(_ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d base 16),
            size: 28,
        }
    }

    #[cfg(feature = "secp256r1")]
    pub fn secp256r1() -> Self {
        Curve {
            name: "secp256r1",
            kind: CurveKind::Secp256r1,
            n: ibig!(_ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551 base 16),
            size: 32,
        }
    }

    #[cfg(feature = "secp256k1")]
    pub fn secp256k1() -> Self {
        Curve {
            name: "secp256k1",
            kind: CurveKind::Secp256k1,
            n: ibig!(_fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141 base 16),
            size: 32,
        }
    }

    #[cfg(feature = "secp384r1")]
    pub fn secp384r1() -> Self {
        Curve {
            name: "secp384r1",
            kind: CurveKind::Secp384r1,
            n: ibig!(_ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973 base 16),
            size: 48,
        }
    }

    pub fn private_key_size(&self) -> usize {
        self.size
    }

    /// Uncompressed affine point `x || y`, without the SEC1 `0x04` tag.
    pub fn public_key_size(&self) -> usize {
        2 * self.size
    }

    /// `r || s`
    pub fn signature_size(&self) -> usize {
        2 * self.size
    }

    /// A private scalar must satisfy `0 < k < n`.
    pub fn is_valid_scalar(&self, k: &IBig) -> bool {
        *k > ibig!(0) && *k < self.n
    }
}

impl PartialEq for Curve {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for Curve {}
