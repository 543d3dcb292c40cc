use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250901_000002_create_products_table::Product,
    m20250901_000004_create_collections_table::Collection,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CollectionProduct::Table)
                    .if_not_exists()
                    .col(pk_auto(CollectionProduct::Id))
                    .col(integer(CollectionProduct::CollectionId))
                    .col(integer(CollectionProduct::ProductId))
                    .col(integer(CollectionProduct::Position).default(0))
                    .col(
                        timestamp(CollectionProduct::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp(CollectionProduct::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collection_product_collection_id")
                            .from(CollectionProduct::Table, CollectionProduct::CollectionId)
                            .to(Collection::Table, Collection::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collection_product_product_id")
                            .from(CollectionProduct::Table, CollectionProduct::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_collection_product_unique_pair")
                    .table(CollectionProduct::Table)
                    .col(CollectionProduct::CollectionId)
                    .col(CollectionProduct::ProductId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CollectionProduct::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CollectionProduct {
    #[sea_orm(iden = "collection_product")]
    Table,
    Id,
    CollectionId,
    ProductId,
    Position,
    CreatedAt,
    UpdatedAt,
}
