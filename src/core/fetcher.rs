//! Event fetcher: turns a month selection into the sorted list of
//! startup/shutdown events found in a log source.

use crate::core::request::MonthRequest;
use crate::errors::{AppError, AppResult};
use crate::models::{LogRecord, RawEvent};
use crate::source::LogSource;
use chrono::{NaiveDate, NaiveDateTime};

/// Half-open interval `[start, end)` of log timestamps to consider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ScanWindow {
    /// Every moment from the start of `first` up to the end of `last`.
    pub fn for_days(first: NaiveDate, last: NaiveDate) -> AppResult<Self> {
        let start = first
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| AppError::InvalidYear(first.to_string()))?;
        let end = last
            .succ_opt()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or_else(|| AppError::InvalidYear(last.to_string()))?;

        Ok(Self { start, end })
    }

    pub fn for_month(req: &MonthRequest) -> AppResult<Self> {
        Self::for_days(req.first_day()?, req.last_day()?)
    }

    pub fn contains(&self, ts: &NaiveDateTime) -> bool {
        self.start <= *ts && *ts < self.end
    }
}

/// Keep only startup/shutdown records inside `window`, sorted by date and time.
///
/// Sources are not trusted to honour the window or to return records in
/// any particular order.
pub fn filter_records(records: &[LogRecord], window: &ScanWindow) -> Vec<RawEvent> {
    let mut events: Vec<RawEvent> = records
        .iter()
        .filter(|r| window.contains(&r.timestamp))
        .filter_map(RawEvent::from_record)
        .collect();

    events.sort_by_key(|e| (e.date, e.time));
    events
}

/// Fetch all startup/shutdown events of the requested month.
///
/// A source failure aborts the whole fetch; nothing read so far is returned.
/// An empty vector means "no data" and is not an error.
pub fn fetch_events(source: &dyn LogSource, req: &MonthRequest) -> AppResult<Vec<RawEvent>> {
    let window = ScanWindow::for_month(req)?;
    let records = source.records(&window)?;
    Ok(filter_records(&records, &window))
}
