//! Create `students` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(pk_auto(Students::Id))
                    .col(string(Students::Name).not_null())
                    .col(string(Students::Surname).not_null())
                    .col(string(Students::Age).not_null())
                    .col(string(Students::Sex).not_null())
                    .col(string(Students::Nationality).not_null())
                    .col(string(Students::FieldOfStudying).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Students::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
    Name,
    Surname,
    Age,
    Sex,
    Nationality,
    FieldOfStudying,
}
