//! Error types for the dice model and estimator.

/// Errors that can occur while building pools or estimating probabilities.
#[derive(Debug, thiserror::Error)]
pub enum DiceError {
    /// A die kind name is not one of the six narrative dice.
    #[error("invalid die kind: {0}")]
    InvalidDieKind(String),

    /// A requested attribute is not recognized in the current mode.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// The sampling configuration cannot produce an estimate.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
