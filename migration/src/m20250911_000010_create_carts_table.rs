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
                    .table(Cart::Table)
                    .if_not_exists()
                    .col(pk_auto(Cart::Id))
                    .col(integer_null(Cart::UserId))
                    .col(string_null(Cart::SessionId))
                    // Populated only while the cart is active. The UNIQUE
                    // constraint is what makes concurrent find-or-create
                    // converge on a single row.
                    .col(string_null(Cart::OwnerKey).unique_key())
                    .col(string(Cart::Status).default("active"))
                    .col(timestamp(Cart::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Cart::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_user_id")
                            .from(Cart::Table, Cart::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cart_user_status")
                    .table(Cart::Table)
                    .col(Cart::UserId)
                    .col(Cart::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cart_session_status")
                    .table(Cart::Table)
                    .col(Cart::SessionId)
                    .col(Cart::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cart::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Cart {
    #[sea_orm(iden = "carts")]
    Table,
    Id,
    UserId,
    SessionId,
    OwnerKey,
    Status,
    CreatedAt,
    UpdatedAt,
}
