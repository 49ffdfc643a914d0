mod job_resolver;
mod log_access_service;
mod pipeline_service;
mod system_status_service;

pub use job_resolver::{STDERR_EXCERPT_LIMIT, resolve_job};
pub use log_access_service::{LogAccessError, LogAccessService};
pub use pipeline_service::{
    DEFAULT_LIST_LIMIT, LaunchPolicy, PipelineError, PipelineScripts, PipelineService,
};
pub use system_status_service::{
    DEFAULT_PROBE_TIMEOUT, DEFAULT_RECENT_LOG_LIMIT, SystemStatusService,
};
