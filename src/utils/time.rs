//! Time-of-day formatting shared by the table and the exporters.

use crate::core::duration::NOT_AVAILABLE;
use chrono::NaiveTime;

/// `HH:MM:SS`, or `N/A` when the marker is missing.
pub fn format_time(t: Option<NaiveTime>) -> String {
    t.map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
