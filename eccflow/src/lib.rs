/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

pub mod config;
pub mod crypto;
pub mod error;
pub mod harness;
pub mod rand;
pub(crate) mod utils;

pub use config::{BenchConfig, BenchConfigBuilder, DemoConfig, DemoConfigBuilder};
pub use crypto::ellipticcurve::{
    digest_message, Curve, CurveKind, CurveRegistry, Digest, EcdhAgent, KeyAgent, KeyPair,
    SharedSecret, Signature, SignatureAgent,
};
pub use error::EccError;
pub use harness::{benchmark, interactive};
pub use utils::log::init as init_logging;
