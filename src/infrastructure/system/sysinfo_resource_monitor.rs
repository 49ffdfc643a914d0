use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use sysinfo::{Disks, MINIMUM_CPU_UPDATE_INTERVAL, System};

use crate::application::ports::{ResourceMonitor, ResourceMonitorError};
use crate::domain::ResourceUsage;

/// Samples host disk, memory and CPU usage through `sysinfo`.
pub struct SysinfoResourceMonitor {
    disk_path: PathBuf,
    cpu_sample_interval: Duration,
}

impl SysinfoResourceMonitor {
    pub fn new(disk_path: PathBuf, cpu_sample_interval: Duration) -> Self {
        Self {
            disk_path,
            cpu_sample_interval: cpu_sample_interval.max(MINIMUM_CPU_UPDATE_INTERVAL),
        }
    }
}

#[async_trait]
impl ResourceMonitor for SysinfoResourceMonitor {
    async fn sample(&self) -> Result<ResourceUsage, ResourceMonitorError> {
        let disk_path = self.disk_path.clone();
        let interval = self.cpu_sample_interval;

        tokio::task::spawn_blocking(move || sample_blocking(&disk_path, interval))
            .await
            .map_err(|e| ResourceMonitorError::SamplingFailed(e.to_string()))
    }
}

fn sample_blocking(disk_path: &Path, cpu_interval: Duration) -> ResourceUsage {
    let mut system = System::new();

    system.refresh_cpu_usage();
    std::thread::sleep(cpu_interval);
    system.refresh_cpu_usage();
    let cpu_percent = Some(round_tenth(f64::from(system.global_cpu_usage())));

    system.refresh_memory();
    let total_memory = system.total_memory();
    let memory_percent = if total_memory > 0 {
        let used = total_memory.saturating_sub(system.available_memory());
        Some(percent(used, total_memory))
    } else {
        None
    };

    ResourceUsage {
        disk_percent: disk_usage_percent(disk_path),
        memory_percent,
        cpu_percent,
    }
}

/// Usage of the disk whose mount point is the longest prefix of `path`.
fn disk_usage_percent(path: &Path) -> Option<f64> {
    let disks = Disks::new_with_refreshed_list();
    let disk = disks
        .list()
        .iter()
        .filter(|disk| path.starts_with(disk.mount_point()))
        .max_by_key(|disk| disk.mount_point().as_os_str().len())?;

    let total = disk.total_space();
    if total == 0 {
        return None;
    }
    Some(percent(total.saturating_sub(disk.available_space()), total))
}

fn percent(used: u64, total: u64) -> f64 {
    round_tenth((used as f64 / total as f64) * 100.0)
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
