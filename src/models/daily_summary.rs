use chrono::{NaiveDate, NaiveTime, TimeDelta};

/// One calendar day of the summarised range.
///
/// `work_duration` is the raw `last_shutdown - first_startup` span: it is
/// never lunch-adjusted nor clamped here and can be negative when the
/// shutdown precedes the startup on the same day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub first_startup: Option<NaiveTime>,
    pub last_shutdown: Option<NaiveTime>,
    pub work_duration: Option<TimeDelta>,
}

impl DailySummary {
    pub fn new(
        date: NaiveDate,
        first_startup: Option<NaiveTime>,
        last_shutdown: Option<NaiveTime>,
    ) -> Self {
        let work_duration = match (first_startup, last_shutdown) {
            (Some(start), Some(end)) => Some(date.and_time(end) - date.and_time(start)),
            _ => None,
        };

        Self {
            date,
            first_startup,
            last_shutdown,
            work_duration,
        }
    }

    /// Row for a day inside the range that has no events at all.
    pub fn empty(date: NaiveDate) -> Self {
        Self::new(date, None, None)
    }

    pub fn has_events(&self) -> bool {
        self.first_startup.is_some() || self.last_shutdown.is_some()
    }
}
