//! Assignment factory linking teachers to seeded lessons.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Assigns a teacher to a lesson created by a factory.
///
/// # Returns
/// - `Ok(entity::lesson_teacher::Model)` - Created assignment row
/// - `Err(DbErr)` - Database error during insert, e.g. unknown lesson or teacher
pub async fn assign_teacher(
    db: &DatabaseConnection,
    lesson_id: i32,
    teacher_id: i32,
) -> Result<entity::lesson_teacher::Model, DbErr> {
    entity::lesson_teacher::ActiveModel {
        lesson_id: ActiveValue::Set(lesson_id),
        teacher_id: ActiveValue::Set(teacher_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
