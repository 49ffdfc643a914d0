use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{DatabaseProbe, LogStore, ResourceMonitor};
use crate::domain::{ResourceUsage, SystemStatus};

use super::PipelineService;

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_RECENT_LOG_LIMIT: usize = 10;

/// Aggregates independent health probes into one snapshot.
///
/// No probe failure propagates: each one degrades only its own field.
pub struct SystemStatusService {
    database_probe: Arc<dyn DatabaseProbe>,
    resource_monitor: Arc<dyn ResourceMonitor>,
    log_store: Arc<dyn LogStore>,
    pipeline_service: Arc<PipelineService>,
    probe_timeout: Duration,
    recent_log_limit: usize,
}

impl SystemStatusService {
    pub fn new(
        database_probe: Arc<dyn DatabaseProbe>,
        resource_monitor: Arc<dyn ResourceMonitor>,
        log_store: Arc<dyn LogStore>,
        pipeline_service: Arc<PipelineService>,
        probe_timeout: Duration,
        recent_log_limit: usize,
    ) -> Self {
        Self {
            database_probe,
            resource_monitor,
            log_store,
            pipeline_service,
            probe_timeout,
            recent_log_limit,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn snapshot(&self) -> SystemStatus {
        let (database_connected, resources, active_pipelines, recent_logs) = tokio::join!(
            self.database_connected(),
            self.resources(),
            self.active_pipelines(),
            self.recent_logs(),
        );

        let status = SystemStatus::new(database_connected, resources, active_pipelines, recent_logs);
        tracing::debug!(
            status = %status.status,
            database_connected,
            active_pipelines = status.active_pipelines,
            "System status computed"
        );
        status
    }

    async fn database_connected(&self) -> bool {
        match tokio::time::timeout(self.probe_timeout, self.database_probe.is_reachable()).await {
            Ok(reachable) => reachable,
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.probe_timeout.as_millis() as u64,
                    "Database probe timed out"
                );
                false
            }
        }
    }

    async fn resources(&self) -> ResourceUsage {
        self.resource_monitor.sample().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Resource sampling failed");
            ResourceUsage::default()
        })
    }

    async fn active_pipelines(&self) -> usize {
        self.pipeline_service.active_count().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to count active pipelines");
            0
        })
    }

    async fn recent_logs(&self) -> Vec<String> {
        self.log_store
            .recent(self.recent_log_limit)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Recent log discovery failed");
                Vec::new()
            })
    }
}
