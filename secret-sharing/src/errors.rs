/// Errors returned when splitting or joining secrets.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    #[error("no valid shares")]
    NoValidShares,
    #[error("inconsistent threshold")]
    InconsistentThreshold,
    #[error("duplicate share index")]
    DuplicateIndex,
    #[error("not enough shares: got {got}, need {need}")]
    InsufficientShares { got: usize, need: usize },
    #[error("malformed share at position {position}")]
    MalformedShare { position: usize },
    #[error("value not invertible")]
    NotInvertible,
}

/// Violated preconditions of a split.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("secret length mismatch: expected {expected} bytes, got {actual}")]
    SecretLength { expected: usize, actual: usize },
    #[error("secret not smaller than the prime modulus")]
    SecretOutOfRange,
    #[error("threshold {0} out of range")]
    ThresholdOutOfRange(u8),
    #[error("share count {0} out of range")]
    ShareCountOutOfRange(u8),
    #[error("threshold {threshold} exceeds share count {shares}")]
    ThresholdExceedsShares { threshold: u8, shares: u8 },
}
