use chrono::Utc;

use crate::application::ports::{ExitOutcome, TrackedJob};

/// Bytes of stderr kept as the error message of a failed job.
pub const STDERR_EXCERPT_LIMIT: usize = 500;

/// Checks whether the job's process has exited and records the outcome.
///
/// Non-blocking. A job without a live handle, or already terminal, is left
/// untouched, so calling this repeatedly is idempotent. Callers hold the
/// record's mutex for the duration.
pub async fn resolve_job(tracked: &mut TrackedJob) {
    if tracked.job().is_terminal() {
        tracked.clear_handle();
        return;
    }

    let Some(handle) = tracked.handle_mut() else {
        return;
    };

    let outcome = match handle.try_exit() {
        Ok(Some(outcome)) => outcome,
        Ok(None) => return,
        Err(e) => {
            tracing::error!(job_id = %tracked.job().id, error = %e, "Failed to poll pipeline process");
            tracked
                .job_mut()
                .fail(Utc::now(), format!("failed to poll pipeline process: {}", e));
            tracked.clear_handle();
            return;
        }
    };

    let failure_message = match outcome {
        ExitOutcome::Success => None,
        ExitOutcome::Failure { code } => Some(
            match handle.stderr_prefix(STDERR_EXCERPT_LIMIT).await {
                Ok(stderr) if !stderr.trim().is_empty() => stderr.trim_end().to_string(),
                Ok(_) => exit_description(code),
                Err(e) => format!("{} (stderr unavailable: {})", exit_description(code), e),
            },
        ),
    };

    let now = Utc::now();
    let job = tracked.job_mut();
    match failure_message {
        None => {
            job.complete(now);
            tracing::info!(job_id = %job.id, pipeline_kind = %job.pipeline_kind, "Pipeline completed");
        }
        Some(message) => {
            job.fail(now, message);
            tracing::warn!(job_id = %job.id, pipeline_kind = %job.pipeline_kind, "Pipeline failed");
        }
    }

    tracked.clear_handle();
}

fn exit_description(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("pipeline exited with status {}", code),
        None => "pipeline terminated by signal".to_string(),
    }
}
