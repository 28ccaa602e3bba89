//! Common transport-layer types shared between backend and frontend.
//! These structs mirror the demo data service's request/response payloads
//! so the frontend can deserialize API responses without duplicating shapes.

pub mod format;
mod forecast;
mod metrics;
mod thresholds;

pub use forecast::{ForecastPointDto, ForecastResultDto, ModelLabelsDto, SeriesPointDto};
pub use metrics::{MetricComparisonDto, MetricEntryDto, MetricKind, MetricsPayload};
pub use thresholds::{MetricThreshold, Thresholds};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the backend.
/// Note: The backend serializes every successful payload through this
/// wrapper. We mirror it here for the frontend to reuse.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
            success: true,
        }
    }
}
