use std::sync::Arc;

use chrono::Utc;
use pipeline_ops::application::ports::{JobRegistry, RepositoryError, TrackedJob};
use pipeline_ops::domain::{Job, JobId, PipelineKind};
use pipeline_ops::infrastructure::persistence::InMemoryJobRegistry;

fn tracked(id: &str) -> TrackedJob {
    TrackedJob::new(
        Job::running(JobId::from_raw(id), PipelineKind::Daily, Utc::now(), None),
        None,
    )
}

#[tokio::test]
async fn given_inserted_job_when_getting_by_id_then_returns_same_record() {
    let registry = InMemoryJobRegistry::new();
    let inserted = registry.insert(tracked("daily_1")).await.unwrap();

    let fetched = registry
        .get(&JobId::from_raw("daily_1"))
        .await
        .unwrap()
        .unwrap();

    assert!(Arc::ptr_eq(&inserted, &fetched));
}

#[tokio::test]
async fn given_empty_registry_when_getting_then_returns_none() {
    let registry = InMemoryJobRegistry::new();

    let fetched = registry.get(&JobId::from_raw("daily_1")).await.unwrap();

    assert!(fetched.is_none());
}

#[tokio::test]
async fn given_existing_id_when_inserting_again_then_returns_constraint_violation() {
    let registry = InMemoryJobRegistry::new();
    registry.insert(tracked("daily_1")).await.unwrap();

    let result = registry.insert(tracked("daily_1")).await;

    assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));
    assert_eq!(registry.all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn given_record_mutated_through_handle_when_getting_then_change_is_visible() {
    let registry = InMemoryJobRegistry::new();
    let shared = registry.insert(tracked("daily_1")).await.unwrap();

    shared.lock().await.job_mut().complete(Utc::now());

    let fetched = registry
        .get(&JobId::from_raw("daily_1"))
        .await
        .unwrap()
        .unwrap();
    assert!(fetched.lock().await.job().is_terminal());
}

#[tokio::test]
async fn given_several_jobs_when_listing_all_then_every_record_is_returned() {
    let registry = InMemoryJobRegistry::new();
    for id in ["daily_1", "daily_2", "weekly_training_1"] {
        registry.insert(tracked(id)).await.unwrap();
    }

    let all = registry.all().await.unwrap();

    assert_eq!(all.len(), 3);
}
