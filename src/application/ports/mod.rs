mod database_probe;
mod job_registry;
mod log_store;
mod process_launcher;
mod repository_error;
mod resource_monitor;

pub use database_probe::DatabaseProbe;
pub use job_registry::{JobRegistry, SharedJob, TrackedJob};
pub use log_store::{LogStore, LogStoreError};
pub use process_launcher::{
    ExitOutcome, LaunchError, LaunchRequest, LaunchedProcess, ProcessHandle, ProcessLauncher,
};
pub use repository_error::RepositoryError;
pub use resource_monitor::{ResourceMonitor, ResourceMonitorError};
