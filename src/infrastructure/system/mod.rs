mod sysinfo_resource_monitor;

pub use sysinfo_resource_monitor::SysinfoResourceMonitor;
