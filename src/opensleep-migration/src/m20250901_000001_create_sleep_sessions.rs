use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SleepSessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SleepSessions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SleepSessions::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SleepSessions::RecordedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SleepSessions::DeviceBedtime).date_time().null())
                    .col(
                        ColumnDef::new(SleepSessions::DeviceWakeUpTime)
                            .date_time()
                            .null(),
                    )
                    .col(ColumnDef::new(SleepSessions::Bedtime).date_time().null())
                    .col(ColumnDef::new(SleepSessions::WakeUpTime).date_time().null())
                    .col(ColumnDef::new(SleepSessions::Duration).integer().null())
                    .col(
                        ColumnDef::new(SleepSessions::SleepDeepDuration)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SleepSessions::SleepLightDuration)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SleepSessions::SleepRemDuration)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SleepSessions::SleepAwakeDuration)
                            .integer()
                            .null(),
                    )
                    .col(ColumnDef::new(SleepSessions::AwakeCount).integer().null())
                    .col(
                        ColumnDef::new(SleepSessions::HasRem)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(SleepSessions::MinHr).small_integer().null())
                    .col(ColumnDef::new(SleepSessions::MaxHr).small_integer().null())
                    .col(ColumnDef::new(SleepSessions::AvgHr).double().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sleep_sessions_user_recorded_at")
                    .table(SleepSessions::Table)
                    .col(SleepSessions::UserId)
                    .col(SleepSessions::RecordedAt)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SleepSegments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SleepSegments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SleepSegments::SessionId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SleepSegments::StartTime)
                            .date_time()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SleepSegments::EndTime).date_time().not_null())
                    .col(
                        ColumnDef::new(SleepSegments::Stage)
                            .small_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sleep_segments_session")
                            .from(SleepSegments::Table, SleepSegments::SessionId)
                            .to(SleepSessions::Table, SleepSessions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(NightHeartRate::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NightHeartRate::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(NightHeartRate::SessionId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(NightHeartRate::Time).date_time().not_null())
                    .col(
                        ColumnDef::new(NightHeartRate::Bpm)
                            .small_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_night_heart_rate_session")
                            .from(NightHeartRate::Table, NightHeartRate::SessionId)
                            .to(SleepSessions::Table, SleepSessions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NightHeartRate::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SleepSegments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SleepSessions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum SleepSessions {
    Table,
    Id,
    UserId,
    RecordedAt,
    DeviceBedtime,
    DeviceWakeUpTime,
    Bedtime,
    WakeUpTime,
    Duration,
    SleepDeepDuration,
    SleepLightDuration,
    SleepRemDuration,
    SleepAwakeDuration,
    AwakeCount,
    HasRem,
    MinHr,
    MaxHr,
    AvgHr,
}

#[derive(Iden)]
pub enum SleepSegments {
    Table,
    Id,
    SessionId,
    StartTime,
    EndTime,
    Stage,
}

#[derive(Iden)]
pub enum NightHeartRate {
    Table,
    Id,
    SessionId,
    Time,
    Bpm,
}
