use std::collections::HashSet;
use std::fmt::Display;

use chrono::NaiveDate;
use repit_types::{DateRange, ExerciseLog};
use serde::Serialize;

use crate::helpers::date_math::{distinct_sorted, round_float, safe_average};
use crate::{current_streak, longest_streak};

/// Sum of reps over rows inside the range; missing days contribute 0.
pub fn total_reps(logs: &[ExerciseLog], range: DateRange) -> i64 {
    logs.iter()
        .filter(|l| range.contains(l.date))
        .map(|l| i64::from(l.reps))
        .sum()
}

/// Highest single-day count in range, 0 when nothing is logged.
pub fn best_day_reps(logs: &[ExerciseLog], range: DateRange) -> i32 {
    logs.iter()
        .filter(|l| range.contains(l.date))
        .map(|l| l.reps)
        .max()
        .unwrap_or(0)
}

/// Distinct in-range dates with logged reps, ascending.
pub fn logged_dates(logs: &[ExerciseLog], range: DateRange) -> Vec<NaiveDate> {
    let dates: Vec<NaiveDate> = logs
        .iter()
        .filter(|l| range.contains(l.date) && l.reps > 0)
        .map(|l| l.date)
        .collect();
    distinct_sorted(&dates)
}

/// Distinct in-range dates whose rows carry the frozen rest-day flag.
pub fn rest_day_dates(logs: &[ExerciseLog], range: DateRange) -> Vec<NaiveDate> {
    let dates: Vec<NaiveDate> = logs
        .iter()
        .filter(|l| range.contains(l.date) && l.is_rest_day)
        .map(|l| l.date)
        .collect();
    distinct_sorted(&dates)
}

/// Days in range minus flagged rest days. A day with no row at all
/// still counts as effective, so sparse logging lowers the average
/// rather than shrinking the denominator.
pub fn effective_day_count(range: DateRange, rest_days: u64) -> i64 {
    range.days() - rest_days as i64
}

/// Aggregate statistics for one exercise over one date range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseStats {
    pub range: DateRange,
    pub total_reps: i64,
    pub days_with_reps: u64,
    pub best_day_reps: i32,
    pub rest_days: u64,
    pub effective_days: i64,
    pub average_reps: f64,
    pub longest_streak: u32,
    pub current_streak: u32,
}

impl ExerciseStats {
    /// `logs` are this exercise's rows inside `range`; `rest_flagged`
    /// holds every frozen rest-day date (across exercises) for streak
    /// bridging; `trailing_dates` are the exercise's logged dates from
    /// the tracking epoch through today, feeding the current streak.
    pub fn new(
        range: DateRange,
        logs: &[ExerciseLog],
        rest_flagged: &HashSet<NaiveDate>,
        trailing_dates: &[NaiveDate],
    ) -> Self {
        let total_reps = total_reps(logs, range);
        let dates_with_reps = logged_dates(logs, range);
        let rest_days = rest_day_dates(logs, range).len() as u64;
        let effective_days = effective_day_count(range, rest_days);

        Self {
            range,
            total_reps,
            days_with_reps: dates_with_reps.len() as u64,
            best_day_reps: best_day_reps(logs, range),
            rest_days,
            effective_days,
            average_reps: safe_average(total_reps, effective_days),
            longest_streak: longest_streak(&dates_with_reps, rest_flagged),
            current_streak: current_streak(trailing_dates, rest_flagged),
        }
    }
}

impl Display for ExerciseStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Total reps: {}\nAverage daily reps: {:.2}\nBest day reps: {}\nExercise days: {}\nRest days: {}\nLongest streak: {}\nCurrent streak: {}",
            self.total_reps,
            round_float(self.average_reps),
            self.best_day_reps,
            self.days_with_reps,
            self.rest_days,
            self.longest_streak,
            self.current_streak,
        ))
    }
}
