use sea_orm_migration::{prelude::*, schema::*};

use super::m20250901_000001_create_users_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(pk_auto(Order::Id))
                    .col(string_uniq(Order::OrderNumber))
                    .col(integer_null(Order::UserId))
                    .col(string(Order::CustomerName))
                    .col(string(Order::CustomerEmail))
                    .col(json(Order::Items))
                    .col(integer(Order::AmountCents))
                    .col(string(Order::Status).default("pending"))
                    .col(json_null(Order::ShippingAddress))
                    .col(timestamp(Order::PlacedAt))
                    .col(timestamp(Order::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Order::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_user_id")
                            .from(Order::Table, Order::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_order_status_placed_at")
                    .table(Order::Table)
                    .col(Order::Status)
                    .col(Order::PlacedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Order {
    #[sea_orm(iden = "orders")]
    Table,
    Id,
    OrderNumber,
    UserId,
    CustomerName,
    CustomerEmail,
    Items,
    AmountCents,
    Status,
    ShippingAddress,
    PlacedAt,
    CreatedAt,
    UpdatedAt,
}
