/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use std::io::Write;
use std::time::{Duration, Instant};

use crate::config::BenchConfig;
use crate::crypto::ellipticcurve::{Curve, Digest, KeyAgent, SignatureAgent, DIGEST_SIZE};
use crate::error::EccError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Keygen,
    Sign,
    Verify,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Keygen, Stage::Sign, Stage::Verify];

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Keygen => "Keygen",
            Stage::Sign => "Sign",
            Stage::Verify => "Verify",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TimingSample {
    pub curve: &'static str,
    pub stage: Stage,
    pub elapsed: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageStats {
    pub count: usize,
    pub total: Duration,
    pub min: Duration,
    pub max: Duration,
}

impl StageStats {
    /// `total / count`, truncated to whole nanoseconds.
    pub fn mean(&self) -> Duration {
        if self.count == 0 {
            return Duration::ZERO;
        }
        Duration::from_nanos((self.total.as_nanos() / self.count as u128) as u64)
    }

    pub fn mean_ms(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.total.as_nanos() as f64 / self.count as f64 / 1e6
    }
}

#[derive(Debug)]
pub struct BenchReport {
    pub curve: &'static str,
    pub iterations: usize,
    pub samples: Vec<TimingSample>,
}

impl BenchReport {
    pub fn samples_for(&self, stage: Stage) -> impl Iterator<Item = &TimingSample> {
        self.samples.iter().filter(move |s| s.stage == stage)
    }

    pub fn stats(&self, stage: Stage) -> StageStats {
        let mut stats = StageStats {
            count: 0,
            total: Duration::ZERO,
            min: Duration::MAX,
            max: Duration::ZERO,
        };
        for sample in self.samples_for(stage) {
            stats.count += 1;
            stats.total += sample.elapsed;
            stats.min = stats.min.min(sample.elapsed);
            stats.max = stats.max.max(sample.elapsed);
        }
        if stats.count == 0 {
            stats.min = Duration::ZERO;
        }
        stats
    }
}

/// Placeholder digest for timing only: the leading bytes of the public key.
fn placeholder_digest(public_key: &[u8]) -> Digest {
    let mut digest = [0u8; DIGEST_SIZE];
    let n = DIGEST_SIZE.min(public_key.len());
    digest[..n].copy_from_slice(&public_key[..n]);
    digest
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let res = f();
    (res, start.elapsed())
}

fn bench_curve(
    curve: &Curve,
    iterations: usize,
    agent: &mut KeyAgent,
) -> Result<BenchReport, EccError> {
    let mut samples = Vec::with_capacity(iterations * Stage::ALL.len());
    let mut record = |stage, elapsed| {
        samples.push(TimingSample {
            curve: curve.name,
            stage,
            elapsed,
        })
    };

    for i in 0..iterations {
        let (pair, elapsed) = timed(|| agent.generate(curve));
        let pair = pair?;
        record(Stage::Keygen, elapsed);

        let digest = placeholder_digest(pair.public_key());

        let (sign, elapsed) = timed(|| SignatureAgent::sign(pair.private_key(), &digest, curve));
        let sign = sign?;
        record(Stage::Sign, elapsed);

        let (valid, elapsed) =
            timed(|| SignatureAgent::verify(pair.public_key(), &digest, sign.as_bytes(), curve));
        if !valid {
            log::error!("{}: verify failed in iteration {i}", curve.name);
            return Err(EccError::Verification(format!(
                "{} signature did not verify in iteration {i}",
                curve.name
            )));
        }
        record(Stage::Verify, elapsed);
    }

    Ok(BenchReport {
        curve: curve.name,
        iterations,
        samples,
    })
}

/// Benchmarks every configured curve. The first failing operation aborts the
/// whole run; nothing after it is measured.
pub fn run<W: Write>(
    config: &BenchConfig,
    agent: &mut KeyAgent,
    out: &mut W,
) -> Result<Vec<BenchReport>, EccError> {
    let iterations = config.iterations();
    let mut reports = vec![];

    writeln!(out, "Benchmarking {iterations} iterations per curve:")?;

    for curve in config.curves() {
        writeln!(out, "\nCurve: {}", curve.name)?;
        out.flush()?;

        let report = bench_curve(curve, iterations, agent)?;

        writeln!(out, "Average timings over {iterations} runs:")?;
        for stage in Stage::ALL {
            let stats = report.stats(stage);
            writeln!(out, "  {:<6} : {:.2} ms", stage.label(), stats.mean_ms())?;
            log::debug!(
                "{} {}: min {:?} max {:?}",
                curve.name,
                stage.label(),
                stats.min,
                stats.max
            );
        }
        reports.push(report);
    }

    Ok(reports)
}
