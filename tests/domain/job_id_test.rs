use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use pipeline_ops::domain::{JobId, PipelineKind, next_launch_instant};

#[test]
fn given_launch_instant_when_building_job_id_then_encodes_kind_and_timestamp() {
    let at = Utc
        .with_ymd_and_hms(2026, 3, 7, 14, 5, 9)
        .unwrap()
        .checked_add_signed(chrono::Duration::microseconds(42))
        .unwrap();

    let id = JobId::new(PipelineKind::WeeklyTraining, at);

    assert_eq!(id.as_str(), "weekly_training_20260307_140509_000042");
    assert_eq!(id.to_string(), id.as_str());
}

#[test]
fn given_rapid_calls_when_issuing_launch_instants_then_each_is_strictly_later() {
    let instants: Vec<_> = (0..1000).map(|_| next_launch_instant()).collect();

    assert!(instants.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn given_same_kind_launched_in_a_burst_when_building_ids_then_ids_are_unique() {
    let ids: HashSet<JobId> = (0..500)
        .map(|_| JobId::new(PipelineKind::Daily, next_launch_instant()))
        .collect();

    assert_eq!(ids.len(), 500);
}

#[test]
fn given_concurrent_threads_when_issuing_launch_instants_then_no_instant_repeats() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| (0..200).map(|_| next_launch_instant()).collect::<Vec<_>>()))
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for instant in handle.join().unwrap() {
            assert!(seen.insert(instant), "duplicate instant {}", instant);
        }
    }
    assert_eq!(seen.len(), 1600);
}

#[test]
fn given_raw_string_when_wrapping_then_round_trips_unchanged() {
    let id = JobId::from_raw("not-a-real-id");

    assert_eq!(id.as_str(), "not-a-real-id");
}
