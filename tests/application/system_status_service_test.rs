use std::time::Duration;

use pipeline_ops::application::services::LaunchPolicy;
use pipeline_ops::domain::{OverallStatus, PipelineKind};

use crate::helpers::{MockDatabaseProbe, StaticResourceMonitor, system_status_service, test_services};

#[tokio::test]
async fn given_all_probes_healthy_when_taking_snapshot_then_status_is_healthy() {
    let services = test_services(LaunchPolicy::default());
    services
        .pipeline_service
        .launch(PipelineKind::Daily)
        .await
        .unwrap();
    let service = system_status_service(
        &services,
        MockDatabaseProbe::reachable(),
        StaticResourceMonitor::healthy(),
        Duration::from_secs(1),
    );

    let status = service.snapshot().await;

    assert_eq!(status.status, OverallStatus::Healthy);
    assert!(status.database_connected);
    assert_eq!(status.resources.disk_percent, Some(41.5));
    assert_eq!(status.active_pipelines, 1);
}

#[tokio::test]
async fn given_slow_database_when_taking_snapshot_then_probe_times_out_as_disconnected() {
    let services = test_services(LaunchPolicy::default());
    let probe = MockDatabaseProbe {
        reachable: true,
        delay: Some(Duration::from_secs(5)),
    };
    let service = system_status_service(
        &services,
        probe,
        StaticResourceMonitor::healthy(),
        Duration::from_millis(50),
    );

    let started = std::time::Instant::now();
    let status = service.snapshot().await;

    assert!(started.elapsed() < Duration::from_secs(2));
    assert!(!status.database_connected);
    assert_eq!(status.status, OverallStatus::Degraded);
    assert_eq!(status.resources.memory_percent, Some(63.2));
}

#[tokio::test]
async fn given_resource_sampling_failure_when_taking_snapshot_then_metrics_are_absent() {
    let services = test_services(LaunchPolicy::default());
    let service = system_status_service(
        &services,
        MockDatabaseProbe::reachable(),
        StaticResourceMonitor { usage: None },
        Duration::from_secs(1),
    );

    let status = service.snapshot().await;

    assert_eq!(status.status, OverallStatus::Healthy);
    assert!(status.resources.disk_percent.is_none());
    assert!(status.resources.memory_percent.is_none());
    assert!(status.resources.cpu_percent.is_none());
}

#[tokio::test]
async fn given_many_log_files_when_taking_snapshot_then_recent_logs_are_capped() {
    let services = test_services(LaunchPolicy::default());
    let log_dir = services.logs_root.join("daily");
    std::fs::create_dir_all(&log_dir).unwrap();
    for i in 0..15 {
        std::fs::write(log_dir.join(format!("run_{:02}.log", i)), "ok").unwrap();
    }
    let service = system_status_service(
        &services,
        MockDatabaseProbe::reachable(),
        StaticResourceMonitor::healthy(),
        Duration::from_secs(1),
    );

    let status = service.snapshot().await;

    assert_eq!(status.recent_logs.len(), 10);
    assert!(status.recent_logs.iter().all(|path| path.starts_with("daily")));
}
