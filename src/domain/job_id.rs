use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

use super::PipelineKind;

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S_%6f";

static LAST_ISSUED_MICROS: AtomicI64 = AtomicI64::new(i64::MIN);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobId(String);

impl JobId {
    /// Builds `<kind>_<YYYYMMDD>_<HHMMSS>_<micros>` from a launch instant.
    pub fn new(kind: PipelineKind, issued_at: DateTime<Utc>) -> Self {
        Self(format!(
            "{}_{}",
            kind.as_str(),
            issued_at.format(TIMESTAMP_FORMAT)
        ))
    }

    pub fn from_raw(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns the current time, bumped so every call in this process yields a
/// strictly later microsecond than the one before.
pub fn next_launch_instant() -> DateTime<Utc> {
    let now = Utc::now();
    let now_micros = now.timestamp_micros();

    let mut last = LAST_ISSUED_MICROS.load(Ordering::Acquire);
    loop {
        let candidate = now_micros.max(last.saturating_add(1));
        match LAST_ISSUED_MICROS.compare_exchange_weak(
            last,
            candidate,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => return DateTime::from_timestamp_micros(candidate).unwrap_or(now),
            Err(actual) => last = actual,
        }
    }
}
