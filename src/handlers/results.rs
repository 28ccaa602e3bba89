use axum::{extract::State, response::Json};
use common::{ApiResponse, ForecastResultDto};
use tracing::{debug, instrument};

use crate::schemas::AppState;

/// Forecast result shown on the results page
#[utoipa::path(
    get,
    path = "/api/v1/results",
    tag = "forecast",
    responses(
        (status = 200, description = "Forecast result retrieved successfully", body = ApiResponse<ForecastResultDto>)
    )
)]
#[instrument(skip(state))]
pub async fn get_results(State(state): State<AppState>) -> Json<ApiResponse<ForecastResultDto>> {
    let dto = ForecastResultDto::from(state.result.as_ref());
    debug!(points = dto.forecast.len(), "Serving forecast result");

    Json(ApiResponse::ok(dto, "Forecast result retrieved successfully"))
}
