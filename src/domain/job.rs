use super::{JobId, JobStatus, PipelineKind};
use chrono::{DateTime, Utc};

/// Lifecycle state of one pipeline invocation.
///
/// `completed_at` is set exactly when `status` is terminal, and
/// `error_message` only ever accompanies `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub id: JobId,
    pub pipeline_kind: PipelineKind,
    pub status: JobStatus,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub log_file: Option<String>,
    pub error_message: Option<String>,
}

impl Job {
    pub fn running(
        id: JobId,
        pipeline_kind: PipelineKind,
        started_at: DateTime<Utc>,
        log_file: Option<String>,
    ) -> Self {
        Self {
            id,
            pipeline_kind,
            status: JobStatus::Running,
            started_at,
            completed_at: None,
            log_file,
            error_message: None,
        }
    }

    /// A record for a launch whose process never started.
    pub fn launch_failed(
        id: JobId,
        pipeline_kind: PipelineKind,
        started_at: DateTime<Utc>,
        error_message: String,
    ) -> Self {
        Self {
            id,
            pipeline_kind,
            status: JobStatus::Failed,
            started_at,
            completed_at: Some(Utc::now()),
            log_file: None,
            error_message: Some(error_message),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns `false` and leaves the job untouched if it cannot move to `Completed`.
    pub fn complete(&mut self, at: DateTime<Utc>) -> bool {
        if !self.status.can_transition_to(JobStatus::Completed) {
            return false;
        }
        self.status = JobStatus::Completed;
        self.completed_at = Some(at);
        self.error_message = None;
        true
    }

    /// Returns `false` and leaves the job untouched if it cannot move to `Failed`.
    pub fn fail(&mut self, at: DateTime<Utc>, error_message: String) -> bool {
        if !self.status.can_transition_to(JobStatus::Failed) {
            return false;
        }
        self.status = JobStatus::Failed;
        self.completed_at = Some(at);
        self.error_message = Some(error_message);
        true
    }
}
