use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::services::DEFAULT_LIST_LIMIT;
use crate::presentation::handlers::error_response::{error_response, pipeline_error_response};
use crate::presentation::handlers::job_status::JobResponse;
use crate::presentation::state::AppState;

const MAX_LIST_LIMIT: usize = 1000;

#[derive(Debug, Deserialize)]
pub struct ListJobsQuery {
    pub limit: Option<String>,
}

#[derive(Serialize)]
pub struct ListJobsResponse {
    pub jobs: Vec<JobResponse>,
    pub count: usize,
}

#[tracing::instrument(skip(state))]
pub async fn list_jobs_handler(
    State(state): State<AppState>,
    Query(query): Query<ListJobsQuery>,
) -> impl IntoResponse {
    let limit = match parse_limit(query.limit.as_deref()) {
        Ok(limit) => limit,
        Err(message) => {
            tracing::debug!(error = %message, "Rejected job listing");
            return error_response(StatusCode::BAD_REQUEST, message);
        }
    };

    match state.pipeline_service.list(limit).await {
        Ok(jobs) => {
            let jobs: Vec<JobResponse> = jobs.into_iter().map(JobResponse::from).collect();
            let count = jobs.len();
            (StatusCode::OK, Json(ListJobsResponse { jobs, count })).into_response()
        }
        Err(e) => pipeline_error_response(e),
    }
}

fn parse_limit(raw: Option<&str>) -> Result<usize, String> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_LIST_LIMIT);
    };

    match raw.trim().parse::<usize>() {
        Ok(limit) if (1..=MAX_LIST_LIMIT).contains(&limit) => Ok(limit),
        _ => Err(format!(
            "Invalid limit: {}. Expected an integer between 1 and {}",
            raw, MAX_LIST_LIMIT
        )),
    }
}
