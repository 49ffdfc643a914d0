use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct LogFile {
    pub filename: String,
    pub content: String,
    pub size: u64,
    pub modified: DateTime<Utc>,
}
