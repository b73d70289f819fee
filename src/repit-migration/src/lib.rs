pub use sea_orm_migration::prelude::*;

mod m20241102_000001_create_exercise_logs;
mod m20241102_000002_create_rest_day_settings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241102_000001_create_exercise_logs::Migration),
            Box::new(m20241102_000002_create_rest_day_settings::Migration),
        ]
    }
}
