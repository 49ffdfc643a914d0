mod job;
mod job_id;
mod job_status;
mod log_file;
mod pipeline_kind;
mod system_status;

pub use job::Job;
pub use job_id::{JobId, next_launch_instant};
pub use job_status::JobStatus;
pub use log_file::LogFile;
pub use pipeline_kind::PipelineKind;
pub use system_status::{OverallStatus, ResourceUsage, SystemStatus};
