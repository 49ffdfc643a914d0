use std::io;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::{JobId, PipelineKind};

pub struct LaunchRequest {
    pub job_id: JobId,
    pub pipeline_kind: PipelineKind,
    pub script: PathBuf,
}

pub struct LaunchedProcess {
    pub handle: Box<dyn ProcessHandle>,
    /// Captured stdout, relative to the logs root.
    pub log_file: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    Success,
    Failure { code: Option<i32> },
}

/// Starts pipeline processes without waiting for them.
#[async_trait]
pub trait ProcessLauncher: Send + Sync {
    async fn launch(&self, request: &LaunchRequest) -> Result<LaunchedProcess, LaunchError>;
}

/// Owned handle to one spawned pipeline process.
#[async_trait]
pub trait ProcessHandle: Send {
    /// Non-blocking: `Ok(None)` while the process is still running.
    fn try_exit(&mut self) -> Result<Option<ExitOutcome>, io::Error>;

    /// Reads at most `max_bytes` from the start of the captured stderr.
    async fn stderr_prefix(&mut self, max_bytes: usize) -> Result<String, io::Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("failed to prepare output capture: {0}")]
    OutputCapture(io::Error),
    #[error("failed to spawn process: {0}")]
    Spawn(io::Error),
}
