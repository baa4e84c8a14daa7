//! Year/month selection validated before any log access.

use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::{Datelike, NaiveDate, TimeDelta};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRequest {
    year: i32,
    month: u32,
}

impl MonthRequest {
    /// Validate a numeric selection.
    ///
    /// The month must be in `1..=12` and the year must yield a representable
    /// calendar date for both the first and the last day of the month.
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        let req = Self { year, month };
        req.first_day()?;
        req.last_day()?;
        Ok(req)
    }

    /// Validate a selection typed by the user.
    pub fn parse(year: &str, month: &str) -> AppResult<Self> {
        let y: i32 = year
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidYear(year.to_string()))?;
        let m: u32 = month
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidMonth(month.to_string()))?;

        Self::new(y, m)
    }

    /// The month containing today (local time).
    pub fn current() -> Self {
        let today = date::today();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Resolve optional CLI values, falling back to the current month.
    pub fn from_args(year: Option<&str>, month: Option<&str>) -> AppResult<Self> {
        let now = Self::current();
        let y = year.map(str::to_string).unwrap_or_else(|| now.year.to_string());
        let m = month
            .map(str::to_string)
            .unwrap_or_else(|| now.month.to_string());
        Self::parse(&y, &m)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    fn check_month(&self) -> AppResult<()> {
        if (1..=12).contains(&self.month) {
            Ok(())
        } else {
            Err(AppError::InvalidMonth(self.month.to_string()))
        }
    }

    pub fn first_day(&self) -> AppResult<NaiveDate> {
        self.check_month()?;
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .ok_or_else(|| AppError::InvalidYear(self.year.to_string()))
    }

    /// Last calendar day of the month: the first day of the following month
    /// minus one day, with December rolling over into January of next year.
    pub fn last_day(&self) -> AppResult<NaiveDate> {
        self.check_month()?;
        let invalid = || AppError::InvalidYear(self.year.to_string());

        let (next_year, next_month) = if self.month == 12 {
            (self.year.checked_add(1).ok_or_else(invalid)?, 1)
        } else {
            (self.year, self.month + 1)
        };

        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.checked_sub_signed(TimeDelta::days(1)))
            .ok_or_else(invalid)
    }

    /// `YYYY-MM`, used in status lines.
    pub fn label(&self) -> String {
        format!("{}-{:02}", self.year, self.month)
    }
}
