use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Message::Table)
                    .if_not_exists()
                    .col(pk_auto(Message::Id))
                    .col(string(Message::Name))
                    .col(string(Message::Email))
                    .col(string_null(Message::Phone))
                    .col(text(Message::Message))
                    .col(string(Message::Type).default("contact"))
                    .col(string(Message::Status).default("new"))
                    .col(timestamp(Message::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Message::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_message_status_created_at")
                    .table(Message::Table)
                    .col(Message::Status)
                    .col(Message::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Message::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Message {
    #[sea_orm(iden = "messages")]
    Table,
    Id,
    Name,
    Email,
    Phone,
    Message,
    Type,
    Status,
    CreatedAt,
    UpdatedAt,
}
