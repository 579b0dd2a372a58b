/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

mod backend;
pub mod curve;
pub mod ecdh;
pub mod ecdsa;
pub mod keypair;
pub mod registry;
pub mod signature;

pub use curve::Curve;
pub use curve::CurveKind;
pub use ecdh::{EcdhAgent, SharedSecret};
pub use ecdsa::{digest_message, Digest, SignatureAgent, DIGEST_SIZE};
pub use keypair::{KeyAgent, KeyPair};
pub use registry::CurveRegistry;
pub use signature::Signature;
