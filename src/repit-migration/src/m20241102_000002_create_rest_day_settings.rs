use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RestDaySettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RestDaySettings::DayOfWeek)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RestDaySettings::IsRestDay)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RestDaySettings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum RestDaySettings {
    Table,
    DayOfWeek,
    IsRestDay,
}
