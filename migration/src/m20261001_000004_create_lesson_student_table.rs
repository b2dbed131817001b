use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000002_create_student_table::Student, m20261001_000003_create_lesson_table::Lesson,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LessonStudent::Table)
                    .if_not_exists()
                    .col(pk_auto(LessonStudent::Id))
                    .col(integer(LessonStudent::LessonId))
                    .col(integer(LessonStudent::StudentId))
                    .col(boolean(LessonStudent::Visit).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_students_lesson_id")
                            .from(LessonStudent::Table, LessonStudent::LessonId)
                            .to(Lesson::Table, Lesson::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_students_student_id")
                            .from(LessonStudent::Table, LessonStudent::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lesson_students_lesson_id")
                    .table(LessonStudent::Table)
                    .col(LessonStudent::LessonId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LessonStudent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LessonStudent {
    #[sea_orm(iden = "lesson_students")]
    Table,
    Id,
    LessonId,
    StudentId,
    Visit,
}
