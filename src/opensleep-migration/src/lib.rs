pub use sea_orm_migration::prelude::*;

pub mod m20250901_000001_create_sleep_sessions;
mod m20250901_000002_sleep_statistics;
mod m20251005_000000_add_recommendation;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_sleep_sessions::Migration),
            Box::new(m20250901_000002_sleep_statistics::Migration),
            Box::new(m20251005_000000_add_recommendation::Migration),
        ]
    }
}
