use chrono::NaiveDate;
use repit_entities::exercise_logs;
use repit_types::{DateReps, Exercise, ExerciseLog};
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect, SelectColumns,
};

use crate::DatabaseHandler;

/// Optional inclusive date bounds for log scans.
#[derive(Default, Debug, Clone, Copy)]
pub struct SearchLogs {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl SearchLogs {
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub(crate) fn conditions(self) -> Condition {
        Condition::all()
            .add_option(self.from.map(|from| exercise_logs::Column::Date.gte(from)))
            .add_option(self.to.map(|to| exercise_logs::Column::Date.lte(to)))
    }
}

impl DatabaseHandler {
    pub async fn search_logs(
        &self,
        exercise: Exercise,
        options: SearchLogs,
    ) -> anyhow::Result<Vec<ExerciseLog>> {
        let rows = exercise_logs::Entity::find()
            .filter(exercise_logs::Column::Exercise.eq(exercise.to_string()))
            .filter(options.conditions())
            .order_by_asc(exercise_logs::Column::Date)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(|m| parse_log(exercise, m)).collect())
    }

    /// Distinct dates with logged reps, ascending; the streak input.
    pub async fn dates_with_reps(
        &self,
        exercise: Exercise,
        options: SearchLogs,
    ) -> anyhow::Result<Vec<NaiveDate>> {
        let dates = exercise_logs::Entity::find()
            .filter(exercise_logs::Column::Exercise.eq(exercise.to_string()))
            .filter(exercise_logs::Column::Reps.gt(0))
            .filter(options.conditions())
            .select_only()
            .select_column(exercise_logs::Column::Date)
            .distinct()
            .order_by_asc(exercise_logs::Column::Date)
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(dates)
    }

    /// Every row in range as a chartable series, zero-rep days included.
    pub async fn reps_over_time(
        &self,
        exercise: Exercise,
        options: SearchLogs,
    ) -> anyhow::Result<Vec<DateReps>> {
        let rows = self.search_logs(exercise, options).await?;

        Ok(rows
            .into_iter()
            .map(|l| DateReps {
                date: l.date,
                reps: l.reps,
            })
            .collect())
    }
}

pub(crate) fn parse_log(exercise: Exercise, model: exercise_logs::Model) -> ExerciseLog {
    ExerciseLog {
        exercise,
        date: model.date,
        reps: model.reps,
        goal: model.goal,
        is_rest_day: model.is_rest_day,
    }
}
