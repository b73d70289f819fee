pub(crate) mod exercise;
pub use exercise::Exercise;

pub(crate) mod logs;
pub use logs::{DEFAULT_GOAL, DateReps, ExerciseLog};

pub(crate) mod policy;
pub use policy::{PolicyError, RestDayPolicy, WEEK, weekday_index};

pub(crate) mod range;
pub use range::{DateRange, StatsPeriod, tracking_epoch};
