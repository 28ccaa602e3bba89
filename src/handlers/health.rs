use axum::{extract::State, response::Json};
use tracing::instrument;

use crate::demo_data::ComparisonSource;
use crate::schemas::{AppState, HealthResponse};

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let metrics_source = match state.comparison_source {
        ComparisonSource::Fixture => "fixture",
        ComparisonSource::Backtest => "backtest",
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        forecast_points: state.result.forecast().len(),
        metrics_source: metrics_source.to_string(),
    })
}
