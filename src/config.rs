use crate::error::EsfResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    pub sweep: SweepConfig,
    pub logging: LoggingConfig,
}

impl DriverConfig {
    pub fn from_toml_str(text: &str) -> EsfResult<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> EsfResult<Self> {
        let text = fs::read_to_string(path)?;
        DriverConfig::from_toml_str(&text)
    }
}

/// A descending run of alpha values sampled at a fixed size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub n: usize,
    pub alpha_start: f64,
    pub alpha_step: f64,
    pub steps: u32,
    pub seed: Option<u64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            n: 30,
            alpha_start: 2.0,
            alpha_step: 0.1,
            steps: 20,
            seed: None,
        }
    }
}

impl SweepConfig {
    /// `alpha_start - k * alpha_step` for `k < steps`, dropping values that
    /// are not strictly positive.
    pub fn alphas(&self) -> Vec<f64> {
        (0..self.steps)
            .map(|k| self.alpha_start - k as f64 * self.alpha_step)
            .filter(|alpha| {
                let keep = alpha.is_finite() && *alpha > 0.0;
                if !keep {
                    log::warn!("skipping alpha = {alpha}");
                }
                keep
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "warn".to_string(),
        }
    }
}
