use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_teacher_table::Teacher, m20261001_000003_create_lesson_table::Lesson,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LessonTeacher::Table)
                    .if_not_exists()
                    .col(pk_auto(LessonTeacher::Id))
                    .col(integer(LessonTeacher::LessonId))
                    .col(integer(LessonTeacher::TeacherId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_teachers_lesson_id")
                            .from(LessonTeacher::Table, LessonTeacher::LessonId)
                            .to(Lesson::Table, Lesson::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_teachers_teacher_id")
                            .from(LessonTeacher::Table, LessonTeacher::TeacherId)
                            .to(Teacher::Table, Teacher::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lesson_teachers_lesson_teacher")
                    .table(LessonTeacher::Table)
                    .col(LessonTeacher::LessonId)
                    .col(LessonTeacher::TeacherId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LessonTeacher::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LessonTeacher {
    #[sea_orm(iden = "lesson_teachers")]
    Table,
    Id,
    LessonId,
    TeacherId,
}
