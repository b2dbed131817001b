//! Attendance factory linking students to lessons.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an attendance row for a student in a lesson.
///
/// # Arguments
/// - `db` - Database connection
/// - `lesson_id` - Lesson the student is enrolled in
/// - `student_id` - Enrolled student
/// - `visit` - Whether the student attended
///
/// # Returns
/// - `Ok(entity::lesson_student::Model)` - Created attendance row
/// - `Err(DbErr)` - Database error during insert, e.g. unknown lesson or student
pub async fn create_attendance(
    db: &DatabaseConnection,
    lesson_id: i32,
    student_id: i32,
    visit: bool,
) -> Result<entity::lesson_student::Model, DbErr> {
    entity::lesson_student::ActiveModel {
        lesson_id: ActiveValue::Set(lesson_id),
        student_id: ActiveValue::Set(student_id),
        visit: ActiveValue::Set(visit),
        ..Default::default()
    }
    .insert(db)
    .await
}
