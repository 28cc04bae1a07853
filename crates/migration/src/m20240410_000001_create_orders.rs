//! Create `orders` table.
//!
//! `order_code` is the primary key; `customer_id` carries its own unique
//! constraint.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(string(Orders::OrderCode).primary_key())
                    .col(string(Orders::FoodName).not_null())
                    .col(string(Orders::CustomerName).not_null())
                    .col(string(Orders::CustomerSurname).not_null())
                    .col(string(Orders::CustomerId).unique_key().not_null())
                    .col(string(Orders::DeliveryAddress).not_null())
                    .col(string(Orders::PaymentMethod).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Orders::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    OrderCode,
    FoodName,
    CustomerName,
    CustomerSurname,
    CustomerId,
    DeliveryAddress,
    PaymentMethod,
}
