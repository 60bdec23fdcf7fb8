use crate::error::{EsfError, EsfResult};
use crate::notation::format_cycle_notation;
use crate::sampling::cycles::feller_coupling;
use crate::sampling::{sample_labels, CycleLengths, LabelArrangement, RandomSource};
use serde::Serialize;
use std::fmt;

/// A validated `(n, alpha)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EsfParameters {
    n: usize,
    alpha: f64,
}

impl EsfParameters {
    pub fn new(n: usize, alpha: f64) -> EsfResult<Self> {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(EsfError::InvalidParameter(alpha));
        }
        Ok(EsfParameters { n, alpha })
    }

    /// Accepts sizes from callers that work in signed integers.
    pub fn try_new(n: i64, alpha: f64) -> EsfResult<Self> {
        let n = usize::try_from(n).map_err(|_| EsfError::InvalidSize(n))?;
        EsfParameters::new(n, alpha)
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

/// One sampled permutation: the cycle type and the labels that fill it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EsfPermutation {
    parameters: EsfParameters,
    cycle_lengths: CycleLengths,
    labels: LabelArrangement,
}

impl EsfPermutation {
    pub fn sample<R>(parameters: EsfParameters, rng: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let cycle_lengths = feller_coupling(&parameters, rng);
        let labels = sample_labels(parameters.n, rng);
        EsfPermutation {
            parameters,
            cycle_lengths,
            labels,
        }
    }

    pub fn parameters(&self) -> EsfParameters {
        self.parameters
    }

    pub fn cycle_lengths(&self) -> &CycleLengths {
        &self.cycle_lengths
    }

    pub fn labels(&self) -> &LabelArrangement {
        &self.labels
    }

    pub fn cycle_count(&self) -> usize {
        self.cycle_lengths.cycle_count()
    }

    /// Cycles as slices of the label arrangement, in discovery order.
    pub fn cycles(&self) -> impl Iterator<Item = &[usize]> + '_ {
        let labels = self.labels.as_slice();
        self.cycle_lengths
            .as_slice()
            .iter()
            .scan(0usize, move |start, &len| {
                let cycle = &labels[*start..*start + len];
                *start += len;
                Some(cycle)
            })
    }

    /// One-line form: entry `k - 1` holds the image of label `k`.
    pub fn images(&self) -> Vec<usize> {
        let mut images = vec![0; self.labels.len()];
        for cycle in self.cycles() {
            for (idx, &label) in cycle.iter().enumerate() {
                images[label - 1] = cycle[(idx + 1) % cycle.len()];
            }
        }
        images
    }

    pub fn to_cycle_notation(&self) -> EsfResult<String> {
        format_cycle_notation(self.cycle_lengths.as_slice(), self.labels.as_slice())
    }
}

impl fmt::Display for EsfPermutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_cycle_notation().map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

/// Sample a permutation of `n` labels whose cycle type follows ESF(n, alpha)
/// and return it in cycle notation.
pub fn generate_esf_permutation<R>(n: i64, alpha: f64, rng: &mut R) -> EsfResult<String>
where
    R: RandomSource + ?Sized,
{
    let parameters = EsfParameters::try_new(n, alpha)?;
    let permutation = EsfPermutation::sample(parameters, rng);
    log::debug!(
        "sampled n={} alpha={} with {} cycles",
        parameters.n,
        parameters.alpha,
        permutation.cycle_count()
    );
    permutation.to_cycle_notation()
}
