use chrono::{NaiveDate, Weekday};
use repit_algos::ExerciseStats;
use repit_db::DatabaseHandler;
use repit_types::{DateReps, Exercise, RestDayPolicy, StatsPeriod};
use strum::IntoEnumIterator;
use tokio::sync::broadcast;

use crate::{EventBus, LogEvent, LogEventKind};

/// Application service over the store: every mutation goes through
/// here so a change event is published alongside it.
pub struct RepIt {
    pub database: DatabaseHandler,
    events: EventBus,
}

impl RepIt {
    pub fn new(database: DatabaseHandler) -> Self {
        Self {
            database,
            events: EventBus::default(),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LogEvent> {
        self.events.subscribe()
    }

    /// Creates today's rows for every exercise, freezing the live
    /// policy answer into their rest-day flags.
    pub async fn start_day(&self, today: NaiveDate) -> anyhow::Result<()> {
        let exercises: Vec<Exercise> = Exercise::iter().collect();
        self.database.init_today_records(&exercises, today).await
    }

    pub async fn set_reps(
        &self,
        exercise: Exercise,
        reps: u32,
        date: NaiveDate,
    ) -> anyhow::Result<()> {
        let reps = i32::try_from(reps).unwrap_or(i32::MAX);
        self.database.set_reps_for_date(exercise, reps, date).await?;
        debug!("{} set to {} reps on {}", exercise, reps, date);

        self.events.publish(LogEvent {
            kind: LogEventKind::RepsChanged,
            exercise: Some(exercise),
            date,
        });
        Ok(())
    }

    /// Adds on top of the day's count and returns the new total.
    pub async fn add_reps(
        &self,
        exercise: Exercise,
        count: u32,
        date: NaiveDate,
    ) -> anyhow::Result<i32> {
        let current = self.database.reps_for_date(exercise, date).await?;
        let total = current.saturating_add(i32::try_from(count).unwrap_or(i32::MAX));
        self.database.set_reps_for_date(exercise, total, date).await?;

        self.events.publish(LogEvent {
            kind: LogEventKind::RepsChanged,
            exercise: Some(exercise),
            date,
        });
        Ok(total)
    }

    pub async fn reset_reps(&self, exercise: Exercise, date: NaiveDate) -> anyhow::Result<()> {
        self.set_reps(exercise, 0, date).await
    }

    pub async fn set_goal(
        &self,
        exercise: Exercise,
        goal: u32,
        date: NaiveDate,
    ) -> anyhow::Result<()> {
        anyhow::ensure!(goal > 0, "goal must be positive");

        let goal = i32::try_from(goal).unwrap_or(i32::MAX);
        self.database.set_goal_for_date(exercise, goal, date).await?;

        self.events.publish(LogEvent {
            kind: LogEventKind::GoalChanged,
            exercise: Some(exercise),
            date,
        });
        Ok(())
    }

    /// Replaces the weekday policy with exactly the given rest days.
    /// Validates the three-day cap before touching the store; only
    /// weekdays whose value actually changes get the row rewrite.
    pub async fn apply_rest_days(
        &self,
        weekdays: &[Weekday],
        today: NaiveDate,
    ) -> anyhow::Result<RestDayPolicy> {
        let next = RestDayPolicy::from_rest_weekdays(weekdays.iter().copied())?;
        let current = self.database.rest_day_policy().await?;

        for (weekday, enabled) in next.iter() {
            if current.is_rest_day(weekday) != enabled {
                self.database.set_rest_day(weekday, enabled, today).await?;
                info!("rest day {} -> {}", weekday, enabled);
            }
        }

        self.events.publish(LogEvent {
            kind: LogEventKind::PolicyChanged,
            exercise: None,
            date: today,
        });
        Ok(next)
    }

    pub async fn stats(
        &self,
        exercise: Exercise,
        period: StatsPeriod,
        today: NaiveDate,
    ) -> anyhow::Result<ExerciseStats> {
        let range = self.database.stats_range(exercise, period, today).await?;
        self.database.exercise_stats(exercise, range, today).await
    }

    pub async fn series(
        &self,
        exercise: Exercise,
        period: StatsPeriod,
        today: NaiveDate,
    ) -> anyhow::Result<Vec<DateReps>> {
        let range = self.database.stats_range(exercise, period, today).await?;
        self.database
            .reps_over_time(exercise, repit_db::SearchLogs::between(range.start, range.end))
            .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Weekday};
    use repit_db::DatabaseHandler;
    use repit_types::{Exercise, StatsPeriod};

    use super::RepIt;
    use crate::LogEventKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn repit() -> RepIt {
        RepIt::new(DatabaseHandler::new("sqlite::memory:").await)
    }

    #[tokio::test]
    async fn add_reps_accumulates() {
        let app = repit().await;
        let day = date(2024, 11, 4);

        app.set_reps(Exercise::PushUps, 10, day).await.unwrap();
        let total = app.add_reps(Exercise::PushUps, 5, day).await.unwrap();
        assert_eq!(total, 15);

        app.reset_reps(Exercise::PushUps, day).await.unwrap();
        assert_eq!(
            app.database.reps_for_date(Exercise::PushUps, day).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn zero_goal_is_rejected() {
        let app = repit().await;
        let result = app.set_goal(Exercise::Squats, 0, date(2024, 11, 4)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn four_rest_days_are_rejected_before_any_write() {
        let app = repit().await;
        let today = date(2024, 11, 4);

        let result = app
            .apply_rest_days(
                &[Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu],
                today,
            )
            .await;
        assert!(result.is_err());

        let policy = app.database.rest_day_policy().await.unwrap();
        assert_eq!(policy.rest_count(), 0);
    }

    #[tokio::test]
    async fn apply_rest_days_replaces_previous_selection() {
        let app = repit().await;
        let today = date(2024, 11, 4);

        app.apply_rest_days(&[Weekday::Mon, Weekday::Fri], today)
            .await
            .unwrap();
        let policy = app.apply_rest_days(&[Weekday::Sun], today).await.unwrap();

        assert!(policy.is_rest_day(Weekday::Sun));
        assert!(!policy.is_rest_day(Weekday::Mon));
        assert!(!policy.is_rest_day(Weekday::Fri));

        let stored = app.database.rest_day_policy().await.unwrap();
        assert_eq!(stored, policy);
    }

    #[tokio::test]
    async fn mutations_publish_change_events() {
        let app = repit().await;
        let day = date(2024, 11, 4);
        let mut rx = app.subscribe();

        app.set_reps(Exercise::SitUps, 12, day).await.unwrap();
        app.set_goal(Exercise::SitUps, 30, day).await.unwrap();

        let first = rx.recv().await.unwrap();
        assert_eq!(first.kind, LogEventKind::RepsChanged);
        assert_eq!(first.exercise, Some(Exercise::SitUps));

        let second = rx.recv().await.unwrap();
        assert_eq!(second.kind, LogEventKind::GoalChanged);
    }

    #[tokio::test]
    async fn stats_pipeline_runs_end_to_end() {
        let app = repit().await;
        let today = date(2024, 11, 10);

        for (d, reps) in [(8, 20), (9, 25), (10, 25)] {
            app.set_reps(Exercise::PullUps, reps, date(2024, 11, d))
                .await
                .unwrap();
        }

        let stats = app
            .stats(Exercise::PullUps, StatsPeriod::LastWeek, today)
            .await
            .unwrap();
        assert_eq!(stats.total_reps, 70);
        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.longest_streak, 3);
        assert_eq!(stats.average_reps, 10.0);

        let series = app
            .series(Exercise::PullUps, StatsPeriod::LastWeek, today)
            .await
            .unwrap();
        assert_eq!(series.len(), 3);
    }
}
