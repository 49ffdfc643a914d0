use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};
use tracing::instrument;

use crate::application::ports::{JobRegistry, RepositoryError, SharedJob, TrackedJob};
use crate::domain::JobId;

/// Process-scoped job store.
///
/// Created once at service start and dropped at shutdown; every record,
/// including finished ones, lives exactly as long as this value.
#[derive(Default)]
pub struct InMemoryJobRegistry {
    jobs: RwLock<HashMap<JobId, SharedJob>>,
}

impl InMemoryJobRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobRegistry for InMemoryJobRegistry {
    #[instrument(skip(self, tracked), fields(job_id = %tracked.job().id))]
    async fn insert(&self, tracked: TrackedJob) -> Result<SharedJob, RepositoryError> {
        let id = tracked.job().id.clone();
        let mut jobs = self.jobs.write().await;

        if jobs.contains_key(&id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "job {} already exists",
                id
            )));
        }

        let shared = Arc::new(Mutex::new(tracked));
        jobs.insert(id, Arc::clone(&shared));
        Ok(shared)
    }

    async fn get(&self, id: &JobId) -> Result<Option<SharedJob>, RepositoryError> {
        Ok(self.jobs.read().await.get(id).cloned())
    }

    async fn all(&self) -> Result<Vec<SharedJob>, RepositoryError> {
        Ok(self.jobs.read().await.values().cloned().collect())
    }
}
