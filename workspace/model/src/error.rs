use thiserror::Error;

/// Error types for the model crate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// The picked file is neither `text/csv` nor named `*.csv`
    #[error("Invalid file type: '{name}' is not a CSV file")]
    InvalidFileType { name: String },

    /// The picked file has no content
    #[error("File '{name}' is empty")]
    EmptyFile { name: String },

    /// A forecast result violates the ordering or bound invariants
    #[error("Malformed forecast result: {0}")]
    MalformedResult(String),

    /// A metric value is non-finite or out of its domain
    #[error("Invalid {metric} value: {reason}")]
    InvalidMetric { metric: &'static str, reason: String },

    /// Horizon outside of the supported set
    #[error("Unsupported horizon of {0} months (expected 1, 6, 12 or 24)")]
    InvalidHorizon(u32),
}

/// Type alias for Result with ModelError
pub type Result<T> = std::result::Result<T, ModelError>;
