/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use std::io::{BufRead, Write};

use crate::config::DemoConfig;
use crate::crypto::ellipticcurve::{
    digest_message, Curve, Digest, EcdhAgent, KeyAgent, KeyPair, SharedSecret, Signature,
    SignatureAgent,
};
use crate::crypto::xor;
use crate::error::EccError;
use crate::utils::bytes;

/// Everything the walkthrough produced, in the order it was produced.
#[derive(Debug)]
pub struct DemoReport {
    pub curve: &'static str,
    /// Raw bytes as typed, without the line ending. Not necessarily UTF-8.
    pub message: Vec<u8>,
    pub alice: KeyPair,
    pub signature: Signature,
    pub verified: bool,
    pub bob: KeyPair,
    pub shared_secret: SharedSecret,
    pub encrypted: Vec<u8>,
    pub decrypted: Vec<u8>,
}

/// The signing and agreement steps of the walkthrough.
pub(crate) trait Primitives {
    fn sign(
        &self,
        private_key: &[u8],
        digest: &Digest,
        curve: &Curve,
    ) -> Result<Signature, EccError> {
        SignatureAgent::sign(private_key, digest, curve)
    }

    fn verify(
        &self,
        public_key: &[u8],
        digest: &Digest,
        signature: &[u8],
        curve: &Curve,
    ) -> bool {
        SignatureAgent::verify(public_key, digest, signature, curve)
    }

    fn derive_shared(
        &self,
        local_private: &[u8],
        peer_public: &[u8],
        curve: &Curve,
    ) -> Result<SharedSecret, EccError> {
        EcdhAgent::derive_shared(local_private, peer_public, curve)
    }
}

pub(crate) struct Agents;

impl Primitives for Agents {}

pub struct Session<'a, R, W> {
    config: &'a DemoConfig,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(config: &'a DemoConfig, input: R, out: W) -> Self {
        Self { config, input, out }
    }

    fn read_line(&mut self, prompt: &str) -> Result<Vec<u8>, EccError> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = vec![];
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(EccError::Input("unexpected end of input".to_string()));
        }
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn print_hex(&mut self, label: &str, data: &[u8]) -> Result<(), EccError> {
        writeln!(self.out, "{label}: {}", bytes::to_hex(data))?;
        Ok(())
    }

    /// Nothing touches a curve before the choice has been validated.
    pub fn choose_curve(&mut self) -> Result<&'a Curve, EccError> {
        let config: &'a DemoConfig = self.config;
        let curves = config.curves();

        writeln!(self.out, "Available curves:")?;
        for (i, curve) in curves.iter().enumerate() {
            writeln!(self.out, "{}: {}", i + 1, curve.name)?;
        }

        let line = self.read_line(&format!("Choose a curve (1-{}): ", curves.len()))?;
        let line = String::from_utf8_lossy(&line);
        let choice = line
            .trim()
            .parse::<usize>()
            .map_err(|_| EccError::Input(format!("`{}` is not a curve number", line.trim())))?;
        let curve = curves.select(choice)?;

        writeln!(self.out, "Using curve: {}", curve.name)?;
        Ok(curve)
    }

    /// Any bytes are accepted; only the length is bounded.
    pub fn read_message(&mut self) -> Result<Vec<u8>, EccError> {
        let message = self.read_line("Enter a message: ")?;
        if message.len() > self.config.max_message_len() {
            return Err(EccError::Input(format!(
                "message is {} bytes, at most {} are allowed",
                message.len(),
                self.config.max_message_len()
            )));
        }
        writeln!(self.out, "Message: {}", String::from_utf8_lossy(&message))?;
        Ok(message)
    }

    pub fn run(&mut self, agent: &mut KeyAgent) -> Result<DemoReport, EccError> {
        self.run_with(agent, &Agents)
    }

    pub(crate) fn run_with(
        &mut self,
        agent: &mut KeyAgent,
        primitives: &dyn Primitives,
    ) -> Result<DemoReport, EccError> {
        let curve = self.choose_curve()?;
        let message = self.read_message()?;

        let alice = agent.generate(curve)?;
        self.print_hex("Private key", alice.private_key())?;
        self.print_hex("Public key", alice.public_key())?;

        let digest = digest_message(&message);
        let signature = primitives.sign(alice.private_key(), &digest, curve)?;
        self.print_hex("Signature", signature.as_bytes())?;

        let verified = primitives.verify(alice.public_key(), &digest, signature.as_bytes(), curve);
        if verified {
            writeln!(self.out, "Signature verification SUCCESS ✅")?;
        } else {
            log::error!("{}: fresh signature did not verify", curve.name);
            writeln!(self.out, "Signature verification FAILED ❌")?;
        }

        let bob = agent.generate(curve)?;
        let as_alice = primitives.derive_shared(alice.private_key(), bob.public_key(), curve)?;
        let as_bob = primitives.derive_shared(bob.private_key(), alice.public_key(), curve)?;
        if as_alice != as_bob {
            log::error!("{}: ECDH derivations disagree", curve.name);
            return Err(EccError::SecretMismatch);
        }
        self.print_hex("Shared secret", as_alice.as_bytes())?;

        let encrypted = xor::transform(&message, as_alice.as_bytes())?;
        self.print_hex("Encrypted", &encrypted)?;

        let decrypted = xor::transform(&encrypted, as_bob.as_bytes())?;
        writeln!(self.out, "Decrypted: {}", String::from_utf8_lossy(&decrypted))?;
        self.out.flush()?;

        Ok(DemoReport {
            curve: curve.name,
            message,
            alice,
            signature,
            verified,
            bob,
            shared_secret: as_alice,
            encrypted,
            decrypted,
        })
    }
}

pub fn run<R: BufRead, W: Write>(
    config: &DemoConfig,
    agent: &mut KeyAgent,
    input: R,
    out: W,
) -> Result<DemoReport, EccError> {
    Session::new(config, input, out).run(agent)
}
