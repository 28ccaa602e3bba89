use axum::{extract::State, response::Json};
use common::{ApiResponse, MetricComparisonDto, MetricsPayload};
use tracing::{debug, instrument};

use crate::schemas::AppState;

/// Model comparison shown on the metrics page, with the thresholds used to
/// color each value
#[utoipa::path(
    get,
    path = "/api/v1/metrics",
    tag = "forecast",
    responses(
        (status = 200, description = "Metrics retrieved successfully", body = ApiResponse<MetricsPayload>)
    )
)]
#[instrument(skip(state))]
pub async fn get_metrics(State(state): State<AppState>) -> Json<ApiResponse<MetricsPayload>> {
    let payload = MetricsPayload {
        comparison: MetricComparisonDto::from(state.comparison.as_ref()),
        thresholds: state.thresholds.as_ref().clone(),
    };
    debug!(
        metrics = payload.comparison.metrics.len(),
        source = ?state.comparison_source,
        "Serving metrics"
    );

    Json(ApiResponse::ok(payload, "Metrics retrieved successfully"))
}
