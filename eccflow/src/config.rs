/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use crate::crypto::ellipticcurve::CurveRegistry;
use crate::error::EccError;

pub const DEFAULT_ITERATIONS: usize = 256;
pub const DEFAULT_MAX_MESSAGE_LEN: usize = 255;

pub struct BenchConfig {
    pub(crate) iterations: usize,
    pub(crate) curves: CurveRegistry,
}

impl BenchConfig {
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    pub fn curves(&self) -> &CurveRegistry {
        &self.curves
    }
}

pub struct BenchConfigBuilder {
    iterations: usize,
    only: Vec<String>,
}

impl Default for BenchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchConfigBuilder {
    pub fn new() -> Self {
        BenchConfigBuilder {
            iterations: DEFAULT_ITERATIONS,
            only: vec![],
        }
    }
    pub fn set_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
    /// Restricts the run to the named curves. Without any, every compiled
    /// curve is benchmarked.
    pub fn add_curve(mut self, name: &str) -> Self {
        self.only.push(name.to_string());
        self
    }
    pub fn build(self) -> Result<BenchConfig, EccError> {
        if self.iterations == 0 {
            return Err(EccError::Input("iterations must be at least 1".to_string()));
        }
        let compiled = CurveRegistry::compiled();
        let curves = if self.only.is_empty() {
            compiled
        } else {
            compiled.subset(&self.only)?
        };
        Ok(BenchConfig {
            iterations: self.iterations,
            curves,
        })
    }
}

pub struct DemoConfig {
    pub(crate) max_message_len: usize,
    pub(crate) curves: CurveRegistry,
}

impl DemoConfig {
    pub fn max_message_len(&self) -> usize {
        self.max_message_len
    }
    pub fn curves(&self) -> &CurveRegistry {
        &self.curves
    }
}

pub struct DemoConfigBuilder {
    max_message_len: usize,
    curves: Option<CurveRegistry>,
}

impl Default for DemoConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoConfigBuilder {
    pub fn new() -> Self {
        DemoConfigBuilder {
            max_message_len: DEFAULT_MAX_MESSAGE_LEN,
            curves: None,
        }
    }
    pub fn set_max_message_len(mut self, max: usize) -> Self {
        self.max_message_len = max;
        self
    }
    pub fn set_curves(mut self, curves: CurveRegistry) -> Self {
        self.curves = Some(curves);
        self
    }
    pub fn build(self) -> Result<DemoConfig, EccError> {
        let curves = self.curves.unwrap_or_else(CurveRegistry::compiled);
        if curves.is_empty() {
            return Err(EccError::Input("no curves available".to_string()));
        }
        Ok(DemoConfig {
            max_message_len: self.max_message_len,
            curves,
        })
    }
}
