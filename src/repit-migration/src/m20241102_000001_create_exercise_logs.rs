use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExerciseLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExerciseLogs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ExerciseLogs::Exercise)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ExerciseLogs::Date).date().not_null())
                    .col(
                        ColumnDef::new(ExerciseLogs::Reps)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ExerciseLogs::Goal)
                            .integer()
                            .not_null()
                            .default(25),
                    )
                    .col(
                        ColumnDef::new(ExerciseLogs::IsRestDay)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_exercise_logs_exercise_date")
                    .table(ExerciseLogs::Table)
                    .col(ExerciseLogs::Exercise)
                    .col(ExerciseLogs::Date)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExerciseLogs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ExerciseLogs {
    Table,
    Id,
    Exercise,
    Date,
    Reps,
    Goal,
    IsRestDay,
}
