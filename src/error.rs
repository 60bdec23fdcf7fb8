use thiserror::Error;

#[derive(Debug, Error)]
pub enum EsfError {
    #[error("invalid size {0}: permutation size must be non-negative")]
    InvalidSize(i64),
    #[error("invalid parameter alpha = {0}: must be finite and strictly positive")]
    InvalidParameter(f64),
    /// Cycle lengths and label arrangement disagree. Only reachable when the
    /// two halves were sampled for different sizes.
    #[error("cycle lengths sum to {cycle_total} but {label_count} labels were supplied")]
    PreconditionViolation {
        cycle_total: usize,
        label_count: usize,
    },
    #[error("zero-length cycle at position {0}")]
    EmptyCycle(usize),
    #[error("config: {0}")]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type EsfResult<T> = Result<T, EsfError>;
