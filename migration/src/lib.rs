pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_teacher_table;
mod m20261001_000002_create_student_table;
mod m20261001_000003_create_lesson_table;
mod m20261001_000004_create_lesson_student_table;
mod m20261001_000005_create_lesson_teacher_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_teacher_table::Migration),
            Box::new(m20261001_000002_create_student_table::Migration),
            Box::new(m20261001_000003_create_lesson_table::Migration),
            Box::new(m20261001_000004_create_lesson_student_table::Migration),
            Box::new(m20261001_000005_create_lesson_teacher_table::Migration),
        ]
    }
}
