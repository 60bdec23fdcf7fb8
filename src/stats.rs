use crate::permutation::EsfParameters;
use crate::sampling::cycles::feller_coupling;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

const TRIAL_SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// `H_n = 1 + 1/2 + ... + 1/n`, the mean cycle count of a uniform permutation.
pub fn harmonic(n: usize) -> f64 {
    (1..=n).map(|k| 1.0 / k as f64).sum()
}

/// Exact mean number of cycles under ESF(n, alpha).
pub fn expected_cycle_count(params: &EsfParameters) -> f64 {
    trial_probabilities(params).sum()
}

/// Exact variance of the cycle count. The Feller trials are independent, so
/// this is a sum of Bernoulli variances.
pub fn cycle_count_variance(params: &EsfParameters) -> f64 {
    trial_probabilities(params).map(|p| p * (1.0 - p)).sum()
}

fn trial_probabilities(params: &EsfParameters) -> impl Iterator<Item = f64> {
    let alpha = params.alpha();
    (0..params.n()).map(move |i| alpha / (alpha + i as f64))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleCountSummary {
    pub n: usize,
    pub alpha: f64,
    pub trials: u64,
    pub mean: f64,
    pub variance: f64,
    pub expected_mean: f64,
    pub expected_variance: f64,
}

impl CycleCountSummary {
    /// Standardized distance of the empirical mean from the exact one.
    pub fn z_score(&self) -> f64 {
        let standard_error = (self.expected_variance / self.trials as f64).sqrt();
        if standard_error == 0.0 {
            return if self.mean == self.expected_mean { 0.0 } else { f64::INFINITY };
        }
        (self.mean - self.expected_mean) / standard_error
    }
}

/// Cycle counts of `trials` independent samples. Each trial owns a `StdRng`
/// derived from `seed` and its index, so results do not depend on how rayon
/// schedules the work. `on_trial` runs once per finished trial.
pub fn sample_cycle_counts<F>(
    params: &EsfParameters,
    trials: u64,
    seed: u64,
    on_trial: F,
) -> Vec<usize>
where
    F: Fn() + Sync + Send,
{
    (0..trials)
        .into_par_iter()
        .map(|trial| {
            let mut rng = StdRng::seed_from_u64(seed ^ trial.wrapping_mul(TRIAL_SEED_STRIDE));
            let count = feller_coupling(params, &mut rng).cycle_count();
            on_trial();
            count
        })
        .collect()
}

/// `None` when `trials` is zero.
pub fn summarize_cycle_counts(
    params: &EsfParameters,
    trials: u64,
    seed: u64,
) -> Option<CycleCountSummary> {
    if trials == 0 {
        return None;
    }
    summarize(params, &sample_cycle_counts(params, trials, seed, || {}))
}

/// `None` for an empty sample; there is no mean to report.
pub fn summarize(params: &EsfParameters, counts: &[usize]) -> Option<CycleCountSummary> {
    if counts.is_empty() {
        return None;
    }
    let trials = counts.len() as u64;
    let mean = counts.iter().map(|&c| c as f64).sum::<f64>() / counts.len() as f64;
    let variance = if counts.len() < 2 {
        0.0
    } else {
        counts
            .iter()
            .map(|&c| (c as f64 - mean).powi(2))
            .sum::<f64>()
            / (counts.len() - 1) as f64
    };
    log::debug!("cycle counts over {trials} trials: mean {mean:.4}, variance {variance:.4}");
    Some(CycleCountSummary {
        n: params.n(),
        alpha: params.alpha(),
        trials,
        mean,
        variance,
        expected_mean: expected_cycle_count(params),
        expected_variance: cycle_count_variance(params),
    })
}
