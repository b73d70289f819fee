use sea_orm::entity::prelude::*;

/// Weekday policy row, keyed by days-from-Sunday (0..=6).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rest_day_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub day_of_week: i32,
    pub is_rest_day: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
