use sea_orm::entity::prelude::*;

/// One heart-rate reading inside the owning session's night window.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "night_heart_rate")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub session_id: i32,
    pub time: DateTime,
    pub bpm: i16,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sleep_sessions::Entity",
        from = "Column::SessionId",
        to = "super::sleep_sessions::Column::Id"
    )]
    SleepSessions,
}

impl Related<super::sleep_sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SleepSessions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
