use std::io;

use async_trait::async_trait;

use crate::domain::LogFile;

/// Read access to the log directory tree.
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Reads `<root>/<log_type>/<filename>`, refusing anything outside the root.
    async fn read(&self, log_type: &str, filename: &str) -> Result<LogFile, LogStoreError>;

    /// Paths relative to the root, most recently modified first.
    async fn recent(&self, limit: usize) -> Result<Vec<String>, LogStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LogStoreError {
    #[error("access denied: {0}")]
    AccessDenied(String),
    #[error("log not found: {0}")]
    NotFound(String),
    #[error("log is not valid UTF-8: {0}")]
    Decode(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
