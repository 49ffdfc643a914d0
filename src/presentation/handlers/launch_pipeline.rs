use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::domain::PipelineKind;
use crate::presentation::handlers::error_response::{error_response, pipeline_error_response};
use crate::presentation::handlers::job_status::JobResponse;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LaunchPipelineRequest {
    pub pipeline_kind: String,
}

#[derive(Serialize)]
pub struct LaunchPipelineResponse {
    pub success: bool,
    pub message: String,
    pub job_id: String,
    pub job: JobResponse,
}

#[tracing::instrument(skip(state, payload))]
pub async fn launch_pipeline_handler(
    State(state): State<AppState>,
    payload: Result<Json<LaunchPipelineRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Rejected launch body");
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    let kind = match request.pipeline_kind.parse::<PipelineKind>() {
        Ok(kind) => kind,
        Err(message) => {
            tracing::debug!(error = %message, "Rejected pipeline launch");
            return error_response(StatusCode::BAD_REQUEST, message);
        }
    };

    match state.pipeline_service.launch(kind).await {
        Ok(job) => {
            let job_id = job.id.to_string();
            (
                StatusCode::ACCEPTED,
                Json(LaunchPipelineResponse {
                    success: true,
                    message: format!("Pipeline {} started", kind),
                    job_id,
                    job: JobResponse::from(job),
                }),
            )
                .into_response()
        }
        Err(e) => pipeline_error_response(e),
    }
}
