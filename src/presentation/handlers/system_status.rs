use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::SystemStatus;
use crate::presentation::state::AppState;

#[derive(Debug, Serialize)]
pub struct SystemStatusResponse {
    pub status: String,
    pub database_connected: bool,
    pub disk_percent: Option<f64>,
    pub memory_percent: Option<f64>,
    pub cpu_percent: Option<f64>,
    pub active_pipelines: usize,
    pub recent_logs: Vec<String>,
}

impl From<SystemStatus> for SystemStatusResponse {
    fn from(snapshot: SystemStatus) -> Self {
        Self {
            status: snapshot.status.as_str().to_string(),
            database_connected: snapshot.database_connected,
            disk_percent: snapshot.resources.disk_percent,
            memory_percent: snapshot.resources.memory_percent,
            cpu_percent: snapshot.resources.cpu_percent,
            active_pipelines: snapshot.active_pipelines,
            recent_logs: snapshot.recent_logs,
        }
    }
}

/// Always 200: a degraded system is reported in the body, not the status code.
#[tracing::instrument(skip(state))]
pub async fn system_status_handler(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.system_status_service.snapshot().await;
    (StatusCode::OK, Json(SystemStatusResponse::from(snapshot)))
}
