use common::{
    ApiResponse, ForecastPointDto, ForecastResultDto, MetricComparisonDto, MetricEntryDto,
    MetricKind, MetricThreshold, MetricsPayload, ModelLabelsDto, SeriesPointDto, Thresholds,
};
use model::{ForecastResult, MetricComparison};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::demo_data::{ComparisonSource, DemoData};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Forecast served on the results page
    pub result: Arc<ForecastResult>,
    /// Comparison served on the metrics page
    pub comparison: Arc<MetricComparison>,
    pub comparison_source: ComparisonSource,
    /// Severity limits sent along with the metrics
    pub thresholds: Arc<Thresholds>,
}

impl AppState {
    pub fn new(data: DemoData, thresholds: Thresholds) -> Self {
        Self {
            result: Arc::new(data.result),
            comparison: Arc::new(data.comparison),
            comparison_source: data.comparison_source,
            thresholds: Arc::new(thresholds),
        }
    }
}

/// Error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Application version
    pub version: String,
    /// Number of forecast periods being served
    pub forecast_points: usize,
    /// "fixture" or "backtest"
    pub metrics_source: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::results::get_results,
        crate::handlers::metrics::get_metrics,
    ),
    components(
        schemas(
            ApiResponse<ForecastResultDto>,
            ApiResponse<MetricsPayload>,
            ForecastResultDto,
            ForecastPointDto,
            SeriesPointDto,
            ModelLabelsDto,
            MetricsPayload,
            MetricComparisonDto,
            MetricEntryDto,
            MetricKind,
            Thresholds,
            MetricThreshold,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "forecast", description = "Forecast results and model comparison"),
    ),
    info(
        title = "SalesVision Demo Data API",
        version = "0.1.0",
        description = "Serves the forecast result and model metrics shown by the SalesVision front-end"
    )
)]
pub struct ApiDoc;
