use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::{Job, JobId};
use crate::presentation::handlers::error_response::pipeline_error_response;
use crate::presentation::state::AppState;

/// Public projection of a job. The process handle never leaves the service.
#[derive(Debug, Serialize)]
pub struct JobResponse {
    pub job_id: String,
    pub pipeline_kind: String,
    pub status: String,
    pub started_at: String,
    pub completed_at: Option<String>,
    pub log_file: Option<String>,
    pub error_message: Option<String>,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            job_id: job.id.to_string(),
            pipeline_kind: job.pipeline_kind.as_str().to_string(),
            status: job.status.as_str().to_string(),
            started_at: job.started_at.to_rfc3339(),
            completed_at: job.completed_at.map(|t| t.to_rfc3339()),
            log_file: job.log_file,
            error_message: job.error_message,
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn job_status_handler(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> impl IntoResponse {
    match state.pipeline_service.get(&JobId::from_raw(job_id)).await {
        Ok(job) => (StatusCode::OK, Json(JobResponse::from(job))).into_response(),
        Err(e) => pipeline_error_response(e),
    }
}
