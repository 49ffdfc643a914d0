use chrono::{Duration, Utc};
use pipeline_ops::domain::{Job, JobId, JobStatus, PipelineKind};

fn running_job() -> Job {
    let started_at = Utc::now();
    Job::running(
        JobId::new(PipelineKind::Daily, started_at),
        PipelineKind::Daily,
        started_at,
        Some("pipelines/daily.stdout.log".to_string()),
    )
}

#[test]
fn given_new_running_job_when_created_then_has_no_completion_or_error() {
    let job = running_job();

    assert_eq!(job.status, JobStatus::Running);
    assert!(job.completed_at.is_none());
    assert!(job.error_message.is_none());
    assert!(!job.is_terminal());
}

#[test]
fn given_running_job_when_completing_then_records_completion_time() {
    let mut job = running_job();
    let at = job.started_at + Duration::seconds(30);

    assert!(job.complete(at));

    assert_eq!(job.status, JobStatus::Completed);
    assert_eq!(job.completed_at, Some(at));
    assert!(job.error_message.is_none());
}

#[test]
fn given_running_job_when_failing_then_records_error_message() {
    let mut job = running_job();
    let at = Utc::now();

    assert!(job.fail(at, "boom".to_string()));

    assert_eq!(job.status, JobStatus::Failed);
    assert_eq!(job.completed_at, Some(at));
    assert_eq!(job.error_message.as_deref(), Some("boom"));
}

#[test]
fn given_completed_job_when_failing_then_job_is_unchanged() {
    let mut job = running_job();
    job.complete(Utc::now());
    let before = job.clone();

    assert!(!job.fail(Utc::now(), "late failure".to_string()));
    assert!(!job.complete(Utc::now()));

    assert_eq!(job, before);
}

#[test]
fn given_spawn_error_when_recording_launch_failure_then_job_is_failed_and_terminal() {
    let started_at = Utc::now();
    let job = Job::launch_failed(
        JobId::new(PipelineKind::MonthlyTraining, started_at),
        PipelineKind::MonthlyTraining,
        started_at,
        "permission denied".to_string(),
    );

    assert_eq!(job.status, JobStatus::Failed);
    assert!(job.is_terminal());
    assert!(job.completed_at.is_some_and(|at| at >= started_at));
    assert!(job.log_file.is_none());
    assert_eq!(job.error_message.as_deref(), Some("permission denied"));
}
