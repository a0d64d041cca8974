use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactSubmissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContactSubmissions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ContactSubmissions::SenderName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContactSubmissions::SenderEmail)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContactSubmissions::ProjectType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ContactSubmissions::Budget).string().not_null())
                    .col(ColumnDef::new(ContactSubmissions::Message).text().not_null())
                    .col(ColumnDef::new(ContactSubmissions::Kind).string().not_null())
                    .col(ColumnDef::new(ContactSubmissions::Subject).string().not_null())
                    .col(
                        ColumnDef::new(ContactSubmissions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_contact_submissions_created_at")
                    .table(ContactSubmissions::Table)
                    .col(ContactSubmissions::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContactSubmissions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ContactSubmissions {
    Table,
    Id,
    SenderName,
    SenderEmail,
    ProjectType,
    Budget,
    Message,
    Kind,
    Subject,
    CreatedAt,
}
