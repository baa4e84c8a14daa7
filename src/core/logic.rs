use crate::core::request::MonthRequest;
use crate::core::{fetcher, summarizer};
use crate::errors::AppResult;
use crate::models::DailySummary;
use crate::source::LogSource;

/// Result of one fetch-and-summarize pass. Each call builds a new report;
/// the caller decides which one to keep.
#[derive(Debug, Clone)]
pub struct MonthReport {
    pub request: MonthRequest,
    pub days: Vec<DailySummary>,
}

impl MonthReport {
    /// "No data" outcome: the month had no startup/shutdown events.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn active_days(&self) -> usize {
        self.days.iter().filter(|d| d.has_events()).count()
    }
}

pub struct Core;

impl Core {
    pub fn build_month_report(
        source: &dyn LogSource,
        request: MonthRequest,
    ) -> AppResult<MonthReport> {
        let events = fetcher::fetch_events(source, &request)?;
        let days = summarizer::summarize(&events);

        Ok(MonthReport { request, days })
    }
}
