use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverallStatus {
    Healthy,
    Degraded,
}

impl OverallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallStatus::Healthy => "healthy",
            OverallStatus::Degraded => "degraded",
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Host resource usage in percent. A metric that could not be sampled is `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResourceUsage {
    pub disk_percent: Option<f64>,
    pub memory_percent: Option<f64>,
    pub cpu_percent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SystemStatus {
    pub status: OverallStatus,
    pub database_connected: bool,
    pub resources: ResourceUsage,
    pub active_pipelines: usize,
    pub recent_logs: Vec<String>,
}

impl SystemStatus {
    pub fn new(
        database_connected: bool,
        resources: ResourceUsage,
        active_pipelines: usize,
        recent_logs: Vec<String>,
    ) -> Self {
        let status = if database_connected {
            OverallStatus::Healthy
        } else {
            OverallStatus::Degraded
        };

        Self {
            status,
            database_connected,
            resources,
            active_pipelines,
            recent_logs,
        }
    }
}
