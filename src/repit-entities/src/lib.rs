pub mod exercise_logs;
pub mod rest_day_settings;
