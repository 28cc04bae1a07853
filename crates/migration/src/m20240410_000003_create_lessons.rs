//! Create `lessons` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lessons::Table)
                    .if_not_exists()
                    .col(pk_auto(Lessons::Id))
                    .col(string(Lessons::Name).not_null())
                    .col(string(Lessons::FieldOfStudying).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Lessons::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Lessons { Table, Id, Name, FieldOfStudying }
