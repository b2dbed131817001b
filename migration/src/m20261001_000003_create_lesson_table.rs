use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lesson::Table)
                    .if_not_exists()
                    .col(pk_auto(Lesson::Id))
                    .col(date(Lesson::Date))
                    .col(string_len(Lesson::Title, 100))
                    .col(small_integer(Lesson::Status).default(0))
                    .to_owned(),
            )
            .await?;

        // Listing always orders and range-filters by date
        manager
            .create_index(
                Index::create()
                    .name("idx_lessons_date")
                    .table(Lesson::Table)
                    .col(Lesson::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lesson::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lesson {
    #[sea_orm(iden = "lessons")]
    Table,
    Id,
    Date,
    Title,
    Status,
}
