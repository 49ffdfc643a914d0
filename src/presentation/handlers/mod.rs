mod error_response;
mod health;
mod job_status;
mod launch_pipeline;
mod list_jobs;
mod logs;
mod system_status;

pub use error_response::ErrorResponse;
pub use health::health_handler;
pub use job_status::{JobResponse, job_status_handler};
pub use launch_pipeline::{LaunchPipelineRequest, LaunchPipelineResponse, launch_pipeline_handler};
pub use list_jobs::{ListJobsResponse, list_jobs_handler};
pub use logs::{LogResponse, log_handler};
pub use system_status::{SystemStatusResponse, system_status_handler};
