use sea_orm::entity::prelude::*;

/// A contiguous stage interval owned by one session; replaced as a
/// batch whenever the parent session is reimported.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sleep_segments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub session_id: i32,
    pub start_time: DateTime,
    pub end_time: DateTime,
    /// Numeric stage code: 2=Light, 3=Deep, 4=REM, 5=Awake.
    pub stage: i16,
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
