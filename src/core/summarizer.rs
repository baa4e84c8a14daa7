//! Daily summarizer: first startup / last shutdown per calendar day.

use crate::models::{DailySummary, EventCode, RawEvent};
use crate::utils::date;
use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, Copy)]
struct DayMarks {
    first_startup: Option<NaiveTime>,
    last_shutdown: Option<NaiveTime>,
}

/// Collapse events into one row per day.
///
/// Rows cover every day between the earliest and the latest event date
/// (both included), so days without events appear as empty rows. Days of
/// the month outside that observed span are not generated.
pub fn summarize(events: &[RawEvent]) -> Vec<DailySummary> {
    let mut by_date: BTreeMap<NaiveDate, DayMarks> = BTreeMap::new();

    for ev in events {
        let marks = by_date.entry(ev.date).or_default();
        match ev.code {
            EventCode::Startup => {
                marks.first_startup = Some(match marks.first_startup {
                    Some(t) => t.min(ev.time),
                    None => ev.time,
                });
            }
            EventCode::Shutdown => {
                marks.last_shutdown = Some(match marks.last_shutdown {
                    Some(t) => t.max(ev.time),
                    None => ev.time,
                });
            }
        }
    }

    let (Some(min_date), Some(max_date)) = (
        by_date.keys().next().copied(),
        by_date.keys().next_back().copied(),
    ) else {
        return Vec::new();
    };

    date::days_between(min_date, max_date)
        .into_iter()
        .map(|d| match by_date.get(&d) {
            Some(m) => DailySummary::new(d, m.first_startup, m.last_shutdown),
            None => DailySummary::empty(d),
        })
        .collect()
}
