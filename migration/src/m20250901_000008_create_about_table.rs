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
                    .table(About::Table)
                    .if_not_exists()
                    .col(pk_auto(About::Id))
                    .col(text(About::Content))
                    .col(json_null(About::Milestones))
                    .col(integer(About::UpdatedByUserId))
                    .col(timestamp(About::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(About::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_about_updated_by_user_id")
                            .from(About::Table, About::UpdatedByUserId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(About::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum About {
    #[sea_orm(iden = "about")]
    Table,
    Id,
    Content,
    Milestones,
    UpdatedByUserId,
    CreatedAt,
    UpdatedAt,
}
