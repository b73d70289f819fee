use sea_orm::entity::prelude::*;

/// One row per (exercise, date); unique index on the pair.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "exercise_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub exercise: String,
    pub date: Date,
    pub reps: i32,
    pub goal: i32,
    pub is_rest_day: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
