//! Validated domain records of the forecast presentation layer.
//!
//! Everything in here is plain immutable data. Construction goes through
//! checked constructors (or `TryFrom` the transport DTOs in `common`), so a
//! value of these types always satisfies its invariants.

pub mod error;
pub mod forecast;
pub mod horizon;
pub mod metric;
pub mod upload;

pub use error::{ModelError, Result};
pub use forecast::{ForecastPoint, ForecastResult, IntervalPoint, ModelLabels, SeriesPoint};
pub use horizon::Horizon;
pub use metric::{MetricComparison, MetricSet};
pub use upload::UploadFile;
