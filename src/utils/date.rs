use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Every day from `start` to `end`, both included. Empty when `start > end`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// `YYYY-MM-DD (Weekday)`
pub fn format_date_weekday(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d (%A)").to_string()
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}
