use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(SleepStatistics::Table)
                    .add_column(ColumnDef::new(SleepStatistics::Recommendation).text().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(SleepStatistics::Table)
                    .drop_column(SleepStatistics::Recommendation)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum SleepStatistics {
    Table,
    Recommendation,
}
