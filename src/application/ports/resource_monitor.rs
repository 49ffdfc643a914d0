use async_trait::async_trait;

use crate::domain::ResourceUsage;

#[async_trait]
pub trait ResourceMonitor: Send + Sync {
    async fn sample(&self) -> Result<ResourceUsage, ResourceMonitorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ResourceMonitorError {
    #[error("sampling failed: {0}")]
    SamplingFailed(String),
}
