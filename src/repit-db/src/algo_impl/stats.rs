use std::collections::HashSet;

use chrono::NaiveDate;
use repit_algos::{ExerciseStats, RestDayCalendar, current_streak, longest_streak};
use repit_types::{DateRange, Exercise, StatsPeriod, tracking_epoch};

use crate::{DatabaseHandler, SearchLogs};

impl DatabaseHandler {
    /// Snapshot of rest-day knowledge as of `today`: frozen flags for
    /// the past, the live weekday policy for today and later.
    pub async fn rest_day_calendar(&self, today: NaiveDate) -> anyhow::Result<RestDayCalendar> {
        let flagged: HashSet<NaiveDate> = self.past_rest_days().await?.into_iter().collect();
        let policy = self.rest_day_policy().await?;

        Ok(RestDayCalendar::new(today, policy, flagged))
    }

    pub async fn is_rest_day(&self, date: NaiveDate, today: NaiveDate) -> anyhow::Result<bool> {
        Ok(self.rest_day_calendar(today).await?.is_rest_day(date))
    }

    /// Reporting range for a period: fixed windows ending today, with
    /// "all time" narrowed to the first logged date when one exists.
    pub async fn stats_range(
        &self,
        exercise: Exercise,
        period: StatsPeriod,
        today: NaiveDate,
    ) -> anyhow::Result<DateRange> {
        if period == StatsPeriod::AllTime {
            let start = self.first_exercise_date(exercise).await?.unwrap_or(today);
            return Ok(DateRange::new(start, today));
        }

        Ok(period.range_ending(today))
    }

    pub async fn exercise_stats(
        &self,
        exercise: Exercise,
        range: DateRange,
        today: NaiveDate,
    ) -> anyhow::Result<ExerciseStats> {
        let logs = self
            .search_logs(exercise, SearchLogs::between(range.start, range.end))
            .await?;
        let rest_flagged: HashSet<NaiveDate> = self.past_rest_days().await?.into_iter().collect();
        let trailing = self
            .dates_with_reps(exercise, SearchLogs::between(tracking_epoch(), today))
            .await?;

        Ok(ExerciseStats::new(range, &logs, &rest_flagged, &trailing))
    }

    pub async fn longest_streak(
        &self,
        exercise: Exercise,
        range: DateRange,
    ) -> anyhow::Result<u32> {
        let dates = self
            .dates_with_reps(exercise, SearchLogs::between(range.start, range.end))
            .await?;
        let rest_flagged: HashSet<NaiveDate> = self.past_rest_days().await?.into_iter().collect();

        Ok(longest_streak(&dates, &rest_flagged))
    }

    pub async fn current_streak(
        &self,
        exercise: Exercise,
        today: NaiveDate,
    ) -> anyhow::Result<u32> {
        let dates = self
            .dates_with_reps(exercise, SearchLogs::between(tracking_epoch(), today))
            .await?;
        let rest_flagged: HashSet<NaiveDate> = self.past_rest_days().await?.into_iter().collect();

        Ok(current_streak(&dates, &rest_flagged))
    }
}
