use pipeline_ops::domain::JobStatus;

#[test]
fn given_each_status_when_formatting_then_uses_lowercase_wire_name() {
    assert_eq!(JobStatus::Pending.to_string(), "pending");
    assert_eq!(JobStatus::Running.to_string(), "running");
    assert_eq!(JobStatus::Completed.to_string(), "completed");
    assert_eq!(JobStatus::Failed.to_string(), "failed");
}

#[test]
fn given_wire_name_when_parsing_then_returns_status() {
    assert_eq!("running".parse::<JobStatus>().unwrap(), JobStatus::Running);
    assert!("RUNNING".parse::<JobStatus>().is_err());
    assert!("done".parse::<JobStatus>().is_err());
}

#[test]
fn given_terminal_statuses_when_checking_then_only_completed_and_failed_are_terminal() {
    assert!(!JobStatus::Pending.is_terminal());
    assert!(!JobStatus::Running.is_terminal());
    assert!(JobStatus::Completed.is_terminal());
    assert!(JobStatus::Failed.is_terminal());
}

#[test]
fn given_running_status_when_checking_transitions_then_only_terminal_targets_allowed() {
    assert!(JobStatus::Running.can_transition_to(JobStatus::Completed));
    assert!(JobStatus::Running.can_transition_to(JobStatus::Failed));
    assert!(!JobStatus::Running.can_transition_to(JobStatus::Pending));
    assert!(!JobStatus::Running.can_transition_to(JobStatus::Running));
}

#[test]
fn given_terminal_status_when_checking_transitions_then_nothing_is_allowed() {
    for from in [JobStatus::Completed, JobStatus::Failed] {
        for to in [
            JobStatus::Pending,
            JobStatus::Running,
            JobStatus::Completed,
            JobStatus::Failed,
        ] {
            assert!(!from.can_transition_to(to), "{} -> {}", from, to);
        }
    }
}
