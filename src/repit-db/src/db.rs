use chrono::{Datelike, NaiveDate, Weekday};
use repit_entities::{exercise_logs, rest_day_settings};
use repit_migration::{Migrator, MigratorTrait, OnConflict};
use repit_types::{DEFAULT_GOAL, Exercise, ExerciseLog, RestDayPolicy, WEEK, weekday_index};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectOptions, Database,
    DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    SelectColumns, Set,
};

#[derive(Clone)]
pub struct DatabaseHandler {
    pub(crate) db: DatabaseConnection,
}

impl DatabaseHandler {
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn new<C>(path: C) -> Self
    where
        C: Into<ConnectOptions>,
    {
        let db = Database::connect(path)
            .await
            .expect("Unable to connect to db");

        Migrator::up(&db, None)
            .await
            .expect("Error running migrations");

        Self { db }
    }

    pub async fn get_log(
        &self,
        exercise: Exercise,
        date: NaiveDate,
    ) -> anyhow::Result<Option<ExerciseLog>> {
        let model = exercise_logs::Entity::find()
            .filter(exercise_logs::Column::Exercise.eq(exercise.to_string()))
            .filter(exercise_logs::Column::Date.eq(date))
            .one(&self.db)
            .await?;

        Ok(model.map(|m| crate::type_impl::logs::parse_log(exercise, m)))
    }

    pub async fn upsert_log(&self, log: ExerciseLog) -> anyhow::Result<()> {
        let row = exercise_logs::ActiveModel {
            id: NotSet,
            exercise: Set(log.exercise.to_string()),
            date: Set(log.date),
            reps: Set(log.reps),
            goal: Set(log.goal),
            is_rest_day: Set(log.is_rest_day),
        };

        exercise_logs::Entity::insert(row)
            .on_conflict(
                OnConflict::columns([
                    exercise_logs::Column::Exercise,
                    exercise_logs::Column::Date,
                ])
                .update_column(exercise_logs::Column::Reps)
                .update_column(exercise_logs::Column::Goal)
                .update_column(exercise_logs::Column::IsRestDay)
                .to_owned(),
            )
            .exec(&self.db)
            .await?;

        Ok(())
    }

    /// Writes the rep count for a day, keeping the existing goal and the
    /// frozen rest-day flag (the flag only changes via policy application).
    pub async fn set_reps_for_date(
        &self,
        exercise: Exercise,
        reps: i32,
        date: NaiveDate,
    ) -> anyhow::Result<()> {
        let current = self.get_log(exercise, date).await?;
        self.upsert_log(ExerciseLog {
            exercise,
            date,
            reps,
            goal: current.as_ref().map_or(DEFAULT_GOAL, |l| l.goal),
            is_rest_day: current.as_ref().is_some_and(|l| l.is_rest_day),
        })
        .await
    }

    pub async fn set_goal_for_date(
        &self,
        exercise: Exercise,
        goal: i32,
        date: NaiveDate,
    ) -> anyhow::Result<()> {
        let current = self.get_log(exercise, date).await?;
        self.upsert_log(ExerciseLog {
            exercise,
            date,
            reps: current.as_ref().map_or(0, |l| l.reps),
            goal,
            is_rest_day: current.as_ref().is_some_and(|l| l.is_rest_day),
        })
        .await
    }

    pub async fn reps_for_date(&self, exercise: Exercise, date: NaiveDate) -> anyhow::Result<i32> {
        Ok(self.get_log(exercise, date).await?.map_or(0, |l| l.reps))
    }

    pub async fn goal_for_date(&self, exercise: Exercise, date: NaiveDate) -> anyhow::Result<i32> {
        Ok(self
            .get_log(exercise, date)
            .await?
            .map_or(DEFAULT_GOAL, |l| l.goal))
    }

    /// Creates today's rows where missing, freezing the current policy
    /// answer into the rest-day flag. Called once per launch; this is
    /// how a live policy value becomes immutable history.
    pub async fn init_today_records(
        &self,
        exercises: &[Exercise],
        today: NaiveDate,
    ) -> anyhow::Result<()> {
        let policy = self.rest_day_policy().await?;
        let rest_today = policy.is_rest_day(today.weekday());

        for &exercise in exercises {
            if self.get_log(exercise, today).await?.is_none() {
                let mut log = ExerciseLog::empty(exercise, today);
                log.is_rest_day = rest_today;
                self.upsert_log(log).await?;
            }
        }

        Ok(())
    }

    pub async fn rest_day_policy(&self) -> anyhow::Result<RestDayPolicy> {
        let rows = rest_day_settings::Entity::find().all(&self.db).await?;

        let mut policy = RestDayPolicy::default();
        for row in rows {
            if let Some(weekday) = usize::try_from(row.day_of_week)
                .ok()
                .and_then(|i| WEEK.get(i))
            {
                policy.set(*weekday, row.is_rest_day);
            }
        }

        Ok(policy)
    }

    /// Updates the weekday policy and rewrites every existing row for
    /// that weekday dated `today` or later: flag takes the new value,
    /// reps and goal reset to their defaults. Rows before `today` keep
    /// their frozen flag. The rewrite is per row, not one transaction;
    /// a concurrent per-date write may win on its own key.
    pub async fn set_rest_day(
        &self,
        weekday: Weekday,
        enabled: bool,
        today: NaiveDate,
    ) -> anyhow::Result<()> {
        let setting = rest_day_settings::ActiveModel {
            day_of_week: Set(weekday_index(weekday) as i32),
            is_rest_day: Set(enabled),
        };

        rest_day_settings::Entity::insert(setting)
            .on_conflict(
                OnConflict::column(rest_day_settings::Column::DayOfWeek)
                    .update_column(rest_day_settings::Column::IsRestDay)
                    .to_owned(),
            )
            .exec(&self.db)
            .await?;

        let rows = exercise_logs::Entity::find()
            .filter(exercise_logs::Column::Date.gte(today))
            .all(&self.db)
            .await?;

        for row in rows {
            if row.date.weekday() != weekday {
                continue;
            }
            let mut row: exercise_logs::ActiveModel = row.into();
            row.is_rest_day = Set(enabled);
            row.reps = Set(0);
            row.goal = Set(DEFAULT_GOAL);
            row.update(&self.db).await?;
        }

        Ok(())
    }

    /// Whether any log row carries the frozen rest-day flag on `date`.
    /// Day-level: the flag is written to every exercise's row alike.
    pub async fn rest_flag_on(&self, date: NaiveDate) -> anyhow::Result<bool> {
        let flagged = exercise_logs::Entity::find()
            .filter(exercise_logs::Column::Date.eq(date))
            .filter(exercise_logs::Column::IsRestDay.eq(true))
            .count(&self.db)
            .await?;

        Ok(flagged > 0)
    }

    /// Distinct dates carrying the frozen rest-day flag, ascending.
    pub async fn past_rest_days(&self) -> anyhow::Result<Vec<NaiveDate>> {
        let dates = exercise_logs::Entity::find()
            .filter(exercise_logs::Column::IsRestDay.eq(true))
            .select_only()
            .select_column(exercise_logs::Column::Date)
            .distinct()
            .order_by_asc(exercise_logs::Column::Date)
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(dates)
    }

    /// Earliest row for the exercise, logged reps or not; bounds the
    /// "all time" reporting range.
    pub async fn first_exercise_date(
        &self,
        exercise: Exercise,
    ) -> anyhow::Result<Option<NaiveDate>> {
        let date = exercise_logs::Entity::find()
            .filter(exercise_logs::Column::Exercise.eq(exercise.to_string()))
            .select_only()
            .select_column(exercise_logs::Column::Date)
            .order_by_asc(exercise_logs::Column::Date)
            .into_tuple()
            .one(&self.db)
            .await?;

        Ok(date)
    }
}
