pub(crate) mod rest;
pub use rest::RestDayCalendar;

pub(crate) mod streak;
pub use streak::{current_streak, longest_streak};

pub(crate) mod stats;
pub use stats::{
    ExerciseStats, best_day_reps, effective_day_count, logged_dates, rest_day_dates, total_reps,
};

pub mod helpers;
