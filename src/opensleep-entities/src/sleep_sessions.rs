use sea_orm::entity::prelude::*;

/// One device-recorded sleep period. `(user_id, recorded_at)` is the
/// natural key; re-import of the same timestamp updates in place.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sleep_sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i64,
    pub recorded_at: DateTime,
    pub device_bedtime: Option<DateTime>,
    pub device_wake_up_time: Option<DateTime>,
    pub bedtime: Option<DateTime>,
    pub wake_up_time: Option<DateTime>,
    pub duration: Option<i32>,
    pub sleep_deep_duration: Option<i32>,
    pub sleep_light_duration: Option<i32>,
    pub sleep_rem_duration: Option<i32>,
    pub sleep_awake_duration: Option<i32>,
    pub awake_count: Option<i32>,
    pub has_rem: bool,
    pub min_hr: Option<i16>,
    pub max_hr: Option<i16>,
    pub avg_hr: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sleep_segments::Entity")]
    SleepSegments,
    #[sea_orm(has_many = "super::night_heart_rate::Entity")]
    NightHeartRate,
}

impl Related<super::sleep_segments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SleepSegments.def()
    }
}

impl Related<super::night_heart_rate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NightHeartRate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
