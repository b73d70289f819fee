use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Floor for "all time" scans. Nothing is ever logged before this.
pub fn tracking_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid epoch date")
}

/// Inclusive calendar date range. `start > end` is the empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of calendar days covered, counting both endpoints.
    pub fn days(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).num_days() + 1
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Reporting periods offered by the stats surfaces.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum StatsPeriod {
    AllTime,
    LastYear,
    LastMonth,
    #[default]
    LastWeek,
}

impl StatsPeriod {
    /// Range ending at `today`. Last week is a 7-day window; all time
    /// starts at the tracking epoch (callers narrow it to the first
    /// logged date when one exists).
    pub fn range_ending(self, today: NaiveDate) -> DateRange {
        let start = match self {
            StatsPeriod::LastWeek => today
                .checked_sub_days(Days::new(6))
                .unwrap_or_else(tracking_epoch),
            StatsPeriod::LastMonth => today
                .checked_sub_months(Months::new(1))
                .unwrap_or_else(tracking_epoch),
            StatsPeriod::LastYear => today
                .checked_sub_months(Months::new(12))
                .unwrap_or_else(tracking_epoch),
            StatsPeriod::AllTime => tracking_epoch(),
        };

        DateRange::new(start, today)
    }
}
