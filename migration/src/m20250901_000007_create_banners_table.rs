use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Banner::Table)
                    .if_not_exists()
                    .col(pk_auto(Banner::Id))
                    .col(string(Banner::Title))
                    .col(string_null(Banner::Tagline))
                    .col(string(Banner::Image))
                    .col(integer(Banner::Position).default(0))
                    .col(boolean(Banner::IsActive).default(true))
                    .col(timestamp(Banner::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Banner::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Banner::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Banner {
    #[sea_orm(iden = "banners")]
    Table,
    Id,
    Title,
    Tagline,
    Image,
    Position,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
