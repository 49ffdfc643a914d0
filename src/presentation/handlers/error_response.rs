use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::PipelineError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

/// Maps pipeline service failures onto HTTP status codes.
pub fn pipeline_error_response(error: PipelineError) -> Response {
    let status = match &error {
        PipelineError::JobNotFound(_) | PipelineError::ScriptNotFound(_) => StatusCode::NOT_FOUND,
        PipelineError::AlreadyRunning { .. } => StatusCode::CONFLICT,
        PipelineError::ScriptNotConfigured(_)
        | PipelineError::ScriptInaccessible { .. }
        | PipelineError::Launch(_)
        | PipelineError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!(error = %error, "Pipeline request failed");
    } else {
        tracing::debug!(error = %error, "Pipeline request rejected");
    }

    error_response(status, error.to_string())
}
