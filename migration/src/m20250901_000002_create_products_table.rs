use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(string_null(Product::Sku).unique_key())
                    .col(string(Product::Name))
                    .col(string_uniq(Product::Slug))
                    .col(text_null(Product::Description))
                    .col(integer(Product::PriceCents))
                    .col(small_integer_null(Product::DiscountPercent).default(0))
                    .col(integer(Product::Stock).default(0))
                    .col(boolean(Product::IsActive).default(true))
                    .col(json_null(Product::Metadata))
                    .col(timestamp(Product::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Product::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_product_is_active")
                    .table(Product::Table)
                    .col(Product::IsActive)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Product {
    #[sea_orm(iden = "products")]
    Table,
    Id,
    Sku,
    Name,
    Slug,
    Description,
    PriceCents,
    DiscountPercent,
    Stock,
    IsActive,
    Metadata,
    CreatedAt,
    UpdatedAt,
}
