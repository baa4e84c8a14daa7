use super::{event_code::EventCode, log_record::LogRecord};
use chrono::{NaiveDate, NaiveTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEvent {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub code: EventCode,
}

impl RawEvent {
    pub fn new(date: NaiveDate, time: NaiveTime, code: EventCode) -> Self {
        Self { date, time, code }
    }

    /// Returns `None` when the record is not a startup/shutdown marker.
    pub fn from_record(record: &LogRecord) -> Option<Self> {
        let code = EventCode::from_event_id(record.event_id)?;
        Some(Self {
            date: record.timestamp.date(),
            time: record.timestamp.time(),
            code,
        })
    }
}
