use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Collection::Table)
                    .if_not_exists()
                    .col(pk_auto(Collection::Id))
                    .col(string(Collection::Name))
                    .col(string_uniq(Collection::Slug))
                    .col(text_null(Collection::Description))
                    .col(string_null(Collection::CoverImage))
                    .col(boolean(Collection::IsActive).default(true))
                    .col(timestamp(Collection::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Collection::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Collection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Collection {
    #[sea_orm(iden = "collections")]
    Table,
    Id,
    Name,
    Slug,
    Description,
    CoverImage,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
