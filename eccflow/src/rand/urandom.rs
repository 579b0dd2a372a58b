/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use rand_core::{OsRng, RngCore};

use crate::error::EccError;
use crate::rand::EntropySource;

/// The operating system CSPRNG (getrandom(2), /dev/urandom, ...).
pub struct OsEntropy(OsRng);

impl OsEntropy {
    pub fn new() -> Self {
        Self(OsRng)
    }
}

impl Default for OsEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EccError> {
        self.0
            .try_fill_bytes(dest)
            .map_err(|e| EccError::KeyGeneration(format!("reading os entropy: {e}")))
    }
}
