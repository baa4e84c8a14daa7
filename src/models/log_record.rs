use chrono::NaiveDateTime;
use serde::Deserialize;

/// One record as produced by a log source, before any filtering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogRecord {
    pub timestamp: NaiveDateTime,
    /// Raw identifier, qualifier bits included
    pub event_id: u32,
}

impl LogRecord {
    pub fn new(timestamp: NaiveDateTime, event_id: u32) -> Self {
        Self {
            timestamp,
            event_id,
        }
    }
}
