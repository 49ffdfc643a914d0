use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Job, JobId};

use super::{ProcessHandle, RepositoryError};

/// A stored record. Its mutex serializes resolution of this one job.
pub type SharedJob = Arc<Mutex<TrackedJob>>;

/// A job record together with the process handle it exclusively owns.
pub struct TrackedJob {
    job: Job,
    handle: Option<Box<dyn ProcessHandle>>,
}

impl TrackedJob {
    pub fn new(job: Job, handle: Option<Box<dyn ProcessHandle>>) -> Self {
        Self { job, handle }
    }

    pub fn job(&self) -> &Job {
        &self.job
    }

    pub fn job_mut(&mut self) -> &mut Job {
        &mut self.job
    }

    pub fn has_handle(&self) -> bool {
        self.handle.is_some()
    }

    pub fn handle_mut(&mut self) -> Option<&mut (dyn ProcessHandle + 'static)> {
        self.handle.as_deref_mut()
    }

    pub fn clear_handle(&mut self) {
        self.handle = None;
    }
}

#[async_trait]
pub trait JobRegistry: Send + Sync {
    async fn insert(&self, tracked: TrackedJob) -> Result<SharedJob, RepositoryError>;

    async fn get(&self, id: &JobId) -> Result<Option<SharedJob>, RepositoryError>;

    async fn all(&self) -> Result<Vec<SharedJob>, RepositoryError>;
}
