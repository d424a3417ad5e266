use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SleepStatistics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SleepStatistics::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SleepStatistics::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SleepStatistics::Date).date().not_null())
                    .col(
                        ColumnDef::new(SleepStatistics::LatencyMinutes)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SleepStatistics::SleepEfficiency)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SleepStatistics::SleepPhases)
                            .json()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SleepStatistics::SleepFragmentationIndex)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SleepStatistics::SleepCaloriesBurned)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SleepStatistics::CycleCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sleep_statistics_user_date")
                    .table(SleepStatistics::Table)
                    .col(SleepStatistics::UserId)
                    .col(SleepStatistics::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SleepStatistics::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum SleepStatistics {
    Table,
    Id,
    UserId,
    Date,
    LatencyMinutes,
    SleepEfficiency,
    SleepPhases,
    SleepFragmentationIndex,
    SleepCaloriesBurned,
    CycleCount,
}
