use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Exercise;

/// Goal assigned to a day that never had one set explicitly.
pub const DEFAULT_GOAL: i32 = 25;

/// One day of one exercise. `is_rest_day` is a frozen snapshot of the
/// rest-day status at the time the row was last written by policy
/// application; for past dates it is the only source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseLog {
    pub exercise: Exercise,
    pub date: NaiveDate,
    pub reps: i32,
    pub goal: i32,
    pub is_rest_day: bool,
}

impl ExerciseLog {
    pub fn empty(exercise: Exercise, date: NaiveDate) -> Self {
        Self {
            exercise,
            date,
            reps: 0,
            goal: DEFAULT_GOAL,
            is_rest_day: false,
        }
    }

    pub fn goal_met(&self) -> bool {
        self.goal > 0 && self.reps >= self.goal
    }
}

/// A single point of a reps-over-time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateReps {
    pub date: NaiveDate,
    pub reps: i32,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{DEFAULT_GOAL, ExerciseLog};
    use crate::Exercise;

    #[test]
    fn empty_log_defaults() {
        let date = NaiveDate::from_ymd_opt(2024, 11, 4).unwrap();
        let log = ExerciseLog::empty(Exercise::Squats, date);
        assert_eq!(log.reps, 0);
        assert_eq!(log.goal, DEFAULT_GOAL);
        assert!(!log.is_rest_day);
        assert!(!log.goal_met());
    }

    #[test]
    fn goal_met_at_exact_goal() {
        let date = NaiveDate::from_ymd_opt(2024, 11, 4).unwrap();
        let mut log = ExerciseLog::empty(Exercise::PushUps, date);
        log.reps = DEFAULT_GOAL;
        assert!(log.goal_met());
    }
}
