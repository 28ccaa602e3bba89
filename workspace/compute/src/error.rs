use model::ModelError;
use thiserror::Error;

/// Error types for the compute module
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputeError {
    /// Invalid input rejected by the domain model
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The external prediction service reported a failure
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    /// Metrics could not be computed from the given series
    #[error("Evaluation error: {0}")]
    Evaluation(String),

    /// Classification thresholds are inconsistent
    #[error("Invalid thresholds: {0}")]
    InvalidThresholds(String),
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
