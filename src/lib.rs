pub mod config;
pub mod error;
pub mod notation;
pub mod permutation;
pub mod sampling;
pub mod stats;

pub use config::{DriverConfig, LoggingConfig, SweepConfig};
pub use error::{EsfError, EsfResult};
pub use notation::{format_cycle_notation, EMPTY_PERMUTATION};
pub use permutation::{generate_esf_permutation, EsfParameters, EsfPermutation};
pub use sampling::{
    sample_cycle_lengths, sample_labels, CycleLengths, LabelArrangement, RandomSource,
};
pub use stats::{
    cycle_count_variance, expected_cycle_count, harmonic, summarize_cycle_counts,
    CycleCountSummary,
};
