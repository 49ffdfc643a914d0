use std::sync::Arc;

use crate::application::ports::{LogStore, LogStoreError};
use crate::domain::LogFile;

pub struct LogAccessService {
    log_store: Arc<dyn LogStore>,
}

impl LogAccessService {
    pub fn new(log_store: Arc<dyn LogStore>) -> Self {
        Self { log_store }
    }

    #[tracing::instrument(skip(self))]
    pub async fn fetch(&self, log_type: &str, filename: &str) -> Result<LogFile, LogAccessError> {
        validate_component("log_type", log_type)?;
        validate_component("filename", filename)?;

        match self.log_store.read(log_type, filename).await {
            Ok(log) => Ok(log),
            Err(LogStoreError::AccessDenied(path)) => {
                tracing::warn!(log_type, filename, "Rejected log path outside the logs root");
                Err(LogAccessError::AccessDenied(path))
            }
            Err(LogStoreError::NotFound(path)) => Err(LogAccessError::NotFound(path)),
            Err(e) => {
                tracing::error!(error = %e, "Failed to read log");
                Err(LogAccessError::Internal(e.to_string()))
            }
        }
    }
}

fn validate_component(name: &str, value: &str) -> Result<(), LogAccessError> {
    if value.trim().is_empty() {
        return Err(LogAccessError::Validation(format!("{} must not be empty", name)));
    }
    if value.contains('\0') {
        return Err(LogAccessError::Validation(format!(
            "{} must not contain NUL bytes",
            name
        )));
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum LogAccessError {
    #[error("access denied: {0}")]
    AccessDenied(String),
    #[error("log not found: {0}")]
    NotFound(String),
    #[error("invalid log request: {0}")]
    Validation(String),
    #[error("failed to read log: {0}")]
    Internal(String),
}
