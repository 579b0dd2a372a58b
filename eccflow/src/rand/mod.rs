/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

pub mod seeded;
pub mod urandom;

pub use seeded::SeededEntropy;
pub use urandom::OsEntropy;

use crate::error::EccError;

/// Where private key material comes from.
pub trait EntropySource {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EccError>;
}
