//! Date-window types used to slice a league's weeks.

use crate::error::{PeladaError, Result};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// A calendar month, parsed from `YYYY-MM`.
///
/// Convenience for award computations that run over one month of weeks.
/// Always constructed through [`Month::new`], so the day arithmetic below
/// cannot observe an out-of-range month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        // Validate through chrono rather than re-checking ranges by hand.
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(PeladaError::InvalidMonth { year, month })?;
        Ok(Self { year, month })
    }

    /// First calendar day of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("validated on construction")
    }

    /// Last calendar day of the month.
    pub fn last_day(&self) -> NaiveDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .expect("validated on construction")
            .pred_opt()
            .expect("month start has a predecessor")
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = PeladaError;

    fn from_str(s: &str) -> Result<Self> {
        let (year, month) = s.split_once('-').ok_or_else(|| PeladaError::InvalidScope {
            message: format!("expected YYYY-MM, got '{s}'"),
        })?;
        Self::new(year.parse()?, month.parse()?)
    }
}

/// Resolved date window over a league's weeks.
///
/// A season or month is always a contiguous slice of weeks by date; an open
/// bound means "from the beginning" / "through the end".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scope {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl Scope {
    /// Unbounded scope: every week the league has.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn between(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn month(month: Month) -> Self {
        Self {
            from: Some(month.first_day()),
            to: Some(month.last_day()),
        }
    }

    /// Whether a week dated `date` falls inside this window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }
}
