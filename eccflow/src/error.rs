/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use thiserror::Error;

/// Everything that can abort a workflow.
///
/// A signature that does not verify is not in here: `verify` answers with a
/// plain `false` and the caller keeps going.
#[derive(Debug, Error)]
pub enum EccError {
    #[error("invalid curve selection {index} (expected 1-{available})")]
    OutOfRange { index: usize, available: usize },

    #[error("unknown curve `{0}`")]
    UnknownCurve(String),

    #[error("make_key() failed: {0}")]
    KeyGeneration(String),

    #[error("sign() failed: {0}")]
    Signing(String),

    /// Only the benchmark treats a rejected signature as fatal.
    #[error("verify() failed: {0}")]
    Verification(String),

    #[error("shared_secret() failed: {0}")]
    KeyAgreement(String),

    #[error("shared secret mismatch")]
    SecretMismatch,

    #[error("invalid input: {0}")]
    Input(String),

    #[error("cipher key must not be empty")]
    EmptyKey,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
