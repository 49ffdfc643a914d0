use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::services::LogAccessError;
use crate::presentation::handlers::error_response::error_response;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct LogResponse {
    pub filename: String,
    pub content: String,
    pub size: u64,
    pub modified: String,
}

#[tracing::instrument(skip(state))]
pub async fn log_handler(
    State(state): State<AppState>,
    Path((log_type, filename)): Path<(String, String)>,
) -> impl IntoResponse {
    match state.log_access_service.fetch(&log_type, &filename).await {
        Ok(log) => (
            StatusCode::OK,
            Json(LogResponse {
                filename: log.filename,
                content: log.content,
                size: log.size,
                modified: log.modified.to_rfc3339(),
            }),
        )
            .into_response(),
        Err(e) => {
            let status = match &e {
                LogAccessError::AccessDenied(_) => StatusCode::FORBIDDEN,
                LogAccessError::NotFound(_) => StatusCode::NOT_FOUND,
                LogAccessError::Validation(_) => StatusCode::BAD_REQUEST,
                LogAccessError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            error_response(status, e.to_string())
        }
    }
}
