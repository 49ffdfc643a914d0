use std::sync::Arc;

use crate::application::services::{LogAccessService, PipelineService, SystemStatusService};

/// Shared handler state. Every collaborator is built once in `main` and injected here.
#[derive(Clone)]
pub struct AppState {
    pub pipeline_service: Arc<PipelineService>,
    pub system_status_service: Arc<SystemStatusService>,
    pub log_access_service: Arc<LogAccessService>,
}
