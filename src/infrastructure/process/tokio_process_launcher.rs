use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tokio::process::{Child, Command};
use tracing::instrument;

use crate::application::ports::{
    ExitOutcome, LaunchError, LaunchRequest, LaunchedProcess, ProcessHandle, ProcessLauncher,
};

/// Spawns pipeline scripts as OS processes.
///
/// stdout and stderr go to `<logs_root>/<output_dir>/<job_id>.{stdout,stderr}.log`
/// so a chatty job never stalls on a full pipe.
pub struct TokioProcessLauncher {
    working_dir: PathBuf,
    interpreter: Option<String>,
    logs_root: PathBuf,
    output_dir: String,
}

impl TokioProcessLauncher {
    pub fn new(
        working_dir: PathBuf,
        interpreter: Option<String>,
        logs_root: PathBuf,
        output_dir: String,
    ) -> Self {
        Self {
            working_dir,
            interpreter,
            logs_root,
            output_dir,
        }
    }

    fn command_for(&self, script: &Path) -> Command {
        match &self.interpreter {
            Some(interpreter) => {
                let mut command = Command::new(interpreter);
                command.arg(script);
                command
            }
            None => Command::new(script),
        }
    }
}

#[async_trait]
impl ProcessLauncher for TokioProcessLauncher {
    #[instrument(skip(self, request), fields(job_id = %request.job_id, script = %request.script.display()))]
    async fn launch(&self, request: &LaunchRequest) -> Result<LaunchedProcess, LaunchError> {
        let capture_dir = self.logs_root.join(&self.output_dir);
        tokio::fs::create_dir_all(&capture_dir)
            .await
            .map_err(LaunchError::OutputCapture)?;

        let stdout_name = format!("{}.stdout.log", request.job_id);
        let stderr_name = format!("{}.stderr.log", request.job_id);
        let stderr_path = capture_dir.join(&stderr_name);

        let stdout_file = File::create(capture_dir.join(&stdout_name))
            .await
            .map_err(LaunchError::OutputCapture)?
            .into_std()
            .await;
        let stderr_file = File::create(&stderr_path)
            .await
            .map_err(LaunchError::OutputCapture)?
            .into_std()
            .await;

        let mut command = self.command_for(&request.script);
        command
            .current_dir(&self.working_dir)
            .env("PIPELINE_JOB_ID", request.job_id.as_str())
            .env("PIPELINE_KIND", request.pipeline_kind.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout_file))
            .stderr(Stdio::from(stderr_file));

        let child = command.spawn().map_err(LaunchError::Spawn)?;
        tracing::debug!(pid = child.id(), "Pipeline process spawned");

        Ok(LaunchedProcess {
            handle: Box::new(TokioProcessHandle { child, stderr_path }),
            log_file: Some(format!("{}/{}", self.output_dir, stdout_name)),
        })
    }
}

pub struct TokioProcessHandle {
    child: Child,
    stderr_path: PathBuf,
}

#[async_trait]
impl ProcessHandle for TokioProcessHandle {
    fn try_exit(&mut self) -> Result<Option<ExitOutcome>, io::Error> {
        Ok(self.child.try_wait()?.map(|status| {
            if status.success() {
                ExitOutcome::Success
            } else {
                ExitOutcome::Failure {
                    code: status.code(),
                }
            }
        }))
    }

    async fn stderr_prefix(&mut self, max_bytes: usize) -> Result<String, io::Error> {
        let file = File::open(&self.stderr_path).await?;
        let mut buffer = Vec::with_capacity(max_bytes);
        file.take(max_bytes as u64).read_to_end(&mut buffer).await?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
