/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use super::Curve;
use crate::error::EccError;

/// The curves this build can operate on, in display order.
///
/// Which curves exist is decided by cargo features; nothing outside of
/// [`CurveRegistry::compiled`] has to know about them.
#[derive(Clone, Debug)]
pub struct CurveRegistry {
    curves: Vec<Curve>,
}

impl Default for CurveRegistry {
    fn default() -> Self {
        Self::compiled()
    }
}

impl CurveRegistry {
    pub fn compiled() -> Self {
        #[allow(unused_mut)]
        let mut curves = vec![];
        #[cfg(feature = "secp224r1")]
        curves.push(Curve::secp224r1());
        #[cfg(feature = "secp256r1")]
        curves.push(Curve::secp256r1());
        #[cfg(feature = "secp256k1")]
        curves.push(Curve::secp256k1());
        #[cfg(feature = "secp384r1")]
        curves.push(Curve::secp384r1());
        Self { curves }
    }

    pub fn from_curves(curves: Vec<Curve>) -> Self {
        Self { curves }
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Curve> {
        self.curves.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.curves.iter().map(|c| c.name).collect()
    }

    /// Zero-based lookup.
    pub fn by_index(&self, index: usize) -> Result<&Curve, EccError> {
        self.curves.get(index).ok_or(EccError::OutOfRange {
            index,
            available: self.curves.len(),
        })
    }

    /// One-based lookup, as typed by a user picking from the printed list.
    pub fn select(&self, choice: usize) -> Result<&Curve, EccError> {
        if choice < 1 || choice > self.curves.len() {
            return Err(EccError::OutOfRange {
                index: choice,
                available: self.curves.len(),
            });
        }
        Ok(&self.curves[choice - 1])
    }

    pub fn by_name(&self, name: &str) -> Result<&Curve, EccError> {
        self.curves
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| EccError::UnknownCurve(name.to_string()))
    }

    /// Keeps only the named curves, in the order given.
    pub fn subset(&self, names: &[String]) -> Result<CurveRegistry, EccError> {
        let mut curves = Vec::with_capacity(names.len());
        for name in names {
            curves.push(self.by_name(name)?.clone());
        }
        Ok(Self { curves })
    }
}

impl<'a> IntoIterator for &'a CurveRegistry {
    type Item = &'a Curve;
    type IntoIter = std::slice::Iter<'a, Curve>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.iter()
    }
}
