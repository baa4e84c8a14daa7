// src/export/model.rs

use crate::core::duration::{format_rounded_work_hours, format_work_hours, to_decimal_hours};
use crate::models::DailySummary;
use crate::utils::date::format_date_weekday;
use crate::utils::time::format_time;
use serde::Serialize;

/// One exported row; field order is the column order of the file.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SummaryExport {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "First Startup")]
    pub first_startup: String,
    #[serde(rename = "Last Shutdown")]
    pub last_shutdown: String,
    #[serde(rename = "Work Hours")]
    pub work_hours: String,
    #[serde(rename = "Work Hours (Rounded)")]
    pub work_hours_rounded: String,
    #[serde(rename = "Work Hours (Decimal)")]
    pub work_hours_decimal: Option<f64>,
}

impl From<&DailySummary> for SummaryExport {
    fn from(day: &DailySummary) -> Self {
        Self {
            date: format_date_weekday(&day.date),
            first_startup: format_time(day.first_startup),
            last_shutdown: format_time(day.last_shutdown),
            work_hours: format_work_hours(day.work_duration),
            work_hours_rounded: format_rounded_work_hours(day.work_duration),
            work_hours_decimal: day.work_duration.map(to_decimal_hours),
        }
    }
}

pub fn summaries_to_rows(days: &[DailySummary]) -> Vec<SummaryExport> {
    days.iter().map(SummaryExport::from).collect()
}
