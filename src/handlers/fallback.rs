use axum::{http::{StatusCode, Uri}, response::Json};
use tracing::warn;

use crate::schemas::ErrorResponse;

/// JSON 404 for anything outside the API
pub async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    warn!("No route for {}", uri);
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("No resource at {}", uri.path()),
            code: "NOT_FOUND".to_string(),
        }),
    )
}
