/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

use crate::error::EccError;
use crate::rand::EntropySource;

/// Reproducible ChaCha20 stream. Never use it for real keys.
#[derive(Clone, Debug)]
pub struct SeededEntropy(ChaCha20Rng);

impl SeededEntropy {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl EntropySource for SeededEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EccError> {
        self.0.fill_bytes(dest);
        Ok(())
    }
}
