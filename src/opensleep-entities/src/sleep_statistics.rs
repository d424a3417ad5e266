use sea_orm::entity::prelude::*;

/// Derived quality metrics for one session date. Always recomputed in
/// full on import; `recommendation` is filled later by an external
/// text-generation collaborator.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sleep_statistics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i64,
    pub date: Date,
    pub latency_minutes: f64,
    pub sleep_efficiency: f64,
    pub sleep_phases: Json,
    pub sleep_fragmentation_index: f64,
    pub sleep_calories_burned: f64,
    pub cycle_count: i32,
    pub recommendation: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
