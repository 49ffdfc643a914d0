use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::application::ports::{
    JobRegistry, LaunchRequest, ProcessLauncher, RepositoryError, SharedJob, TrackedJob,
};
use crate::domain::{Job, JobId, JobStatus, PipelineKind, next_launch_instant};

use super::resolve_job;

pub const DEFAULT_LIST_LIMIT: usize = 50;

/// Script locations per pipeline kind.
#[derive(Debug, Clone)]
pub struct PipelineScripts {
    working_dir: PathBuf,
    scripts: HashMap<PipelineKind, PathBuf>,
}

impl PipelineScripts {
    pub fn new(working_dir: PathBuf) -> Self {
        Self {
            working_dir,
            scripts: HashMap::new(),
        }
    }

    pub fn with_script(mut self, kind: PipelineKind, script: impl Into<PathBuf>) -> Self {
        self.scripts.insert(kind, script.into());
        self
    }

    /// Relative scripts are resolved against the working directory.
    pub fn resolve(&self, kind: PipelineKind) -> Option<PathBuf> {
        self.scripts.get(&kind).map(|script| {
            if script.is_absolute() {
                script.clone()
            } else {
                self.working_dir.join(script)
            }
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LaunchPolicy {
    /// Refuse a launch while another job of the same kind is still running.
    pub single_flight_per_kind: bool,
}

pub struct PipelineService {
    registry: Arc<dyn JobRegistry>,
    launcher: Arc<dyn ProcessLauncher>,
    scripts: PipelineScripts,
    policy: LaunchPolicy,
    launch_guard: Mutex<()>,
}

impl PipelineService {
    pub fn new(
        registry: Arc<dyn JobRegistry>,
        launcher: Arc<dyn ProcessLauncher>,
        scripts: PipelineScripts,
        policy: LaunchPolicy,
    ) -> Self {
        Self {
            registry,
            launcher,
            scripts,
            policy,
            launch_guard: Mutex::new(()),
        }
    }

    /// Starts the pipeline and returns its freshly registered, running job.
    ///
    /// Returns as soon as the process is spawned.
    #[tracing::instrument(skip(self), fields(pipeline_kind = %kind))]
    pub async fn launch(&self, kind: PipelineKind) -> Result<Job, PipelineError> {
        let script = self
            .scripts
            .resolve(kind)
            .ok_or(PipelineError::ScriptNotConfigured(kind))?;

        match tokio::fs::try_exists(&script).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!(script = %script.display(), "Pipeline script not found");
                return Err(PipelineError::ScriptNotFound(script));
            }
            Err(source) => {
                tracing::error!(script = %script.display(), error = %source, "Pipeline script inaccessible");
                return Err(PipelineError::ScriptInaccessible { path: script, source });
            }
        }

        let _guard = if self.policy.single_flight_per_kind {
            let guard = self.launch_guard.lock().await;
            if let Some(running) = self.find_running(kind).await? {
                return Err(PipelineError::AlreadyRunning { kind, job_id: running });
            }
            Some(guard)
        } else {
            None
        };

        let started_at = next_launch_instant();
        let job_id = JobId::new(kind, started_at);
        let request = LaunchRequest {
            job_id: job_id.clone(),
            pipeline_kind: kind,
            script,
        };

        match self.launcher.launch(&request).await {
            Ok(launched) => {
                let job = Job::running(job_id, kind, started_at, launched.log_file);
                self.registry
                    .insert(TrackedJob::new(job.clone(), Some(launched.handle)))
                    .await?;
                tracing::info!(job_id = %job.id, "Pipeline started");
                Ok(job)
            }
            Err(e) => {
                let message = e.to_string();
                tracing::error!(job_id = %job_id, error = %message, "Pipeline launch failed");
                let job = Job::launch_failed(job_id, kind, started_at, message.clone());
                self.registry.insert(TrackedJob::new(job, None)).await?;
                Err(PipelineError::Launch(message))
            }
        }
    }

    /// Returns the job after resolving its process state.
    #[tracing::instrument(skip(self), fields(job_id = %id))]
    pub async fn get(&self, id: &JobId) -> Result<Job, PipelineError> {
        let shared = self
            .registry
            .get(id)
            .await?
            .ok_or_else(|| PipelineError::JobNotFound(id.clone()))?;

        let mut tracked = shared.lock().await;
        resolve_job(&mut tracked).await;
        Ok(tracked.job().clone())
    }

    /// Newest jobs first, at most `limit`, each resolved before it is returned.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, limit: usize) -> Result<Vec<Job>, PipelineError> {
        let mut entries: Vec<(Job, SharedJob)> = Vec::new();
        for shared in self.registry.all().await? {
            let job = shared.lock().await.job().clone();
            entries.push((job, shared));
        }

        entries.sort_by(|(a, _), (b, _)| {
            b.started_at
                .cmp(&a.started_at)
                .then_with(|| b.id.as_str().cmp(a.id.as_str()))
        });
        entries.truncate(limit);

        let mut jobs = Vec::with_capacity(entries.len());
        for (_, shared) in entries {
            let mut tracked = shared.lock().await;
            resolve_job(&mut tracked).await;
            jobs.push(tracked.job().clone());
        }

        Ok(jobs)
    }

    /// Jobs whose last recorded status is running. No resolution happens here,
    /// so a process that exited without being read since still counts.
    pub async fn active_count(&self) -> Result<usize, PipelineError> {
        let mut count = 0;
        for shared in self.registry.all().await? {
            if shared.lock().await.job().status == JobStatus::Running {
                count += 1;
            }
        }
        Ok(count)
    }

    async fn find_running(&self, kind: PipelineKind) -> Result<Option<JobId>, PipelineError> {
        for shared in self.registry.all().await? {
            let mut tracked = shared.lock().await;
            if tracked.job().pipeline_kind != kind {
                continue;
            }
            resolve_job(&mut tracked).await;
            if tracked.job().status == JobStatus::Running {
                return Ok(Some(tracked.job().id.clone()));
            }
        }
        Ok(None)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("job not found: {0}")]
    JobNotFound(JobId),
    #[error("no script configured for pipeline {0}")]
    ScriptNotConfigured(PipelineKind),
    #[error("pipeline script not found: {}", .0.display())]
    ScriptNotFound(PathBuf),
    #[error("cannot access pipeline script {}: {source}", path.display())]
    ScriptInaccessible {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("pipeline {kind} is already running as {job_id}")]
    AlreadyRunning { kind: PipelineKind, job_id: JobId },
    #[error("launch failed: {0}")]
    Launch(String),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}
