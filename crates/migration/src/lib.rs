//! Migrator registering one migration per table.
//! Tables use `IF NOT EXISTS` so re-running on an existing file is a no-op.
pub use sea_orm_migration::prelude::*;

mod m20240410_000001_create_orders;
mod m20240410_000002_create_students;
mod m20240410_000003_create_lessons;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240410_000001_create_orders::Migration),
            Box::new(m20240410_000002_create_students::Migration),
            Box::new(m20240410_000003_create_lessons::Migration),
        ]
    }
}
