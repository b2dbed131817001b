//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Students, teachers and attendance rows are pre-existing
//! data from the scheduler's point of view, so tests seed them through these factories.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let teacher = factory::create_teacher(&db).await?;
//! let student = factory::create_student(&db).await?;
//! let lesson = factory::lesson::LessonFactory::new(&db)
//!     .date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
//!     .status(1)
//!     .build()
//!     .await?;
//! factory::create_attendance(&db, lesson.id, student.id, true).await?;
//! factory::assign_teacher(&db, lesson.id, teacher.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `teacher` - Create teacher entities
//! - `student` - Create student entities
//! - `lesson` - Create lesson entities directly, bypassing series generation
//! - `lesson_student` - Create attendance rows
//! - `lesson_teacher` - Create teacher assignments for seeded lessons
//! - `helpers` - ID generation

pub mod helpers;
pub mod lesson;
pub mod lesson_student;
pub mod lesson_teacher;
pub mod student;
pub mod teacher;

pub use lesson::create_lesson;
pub use lesson_student::create_attendance;
pub use lesson_teacher::assign_teacher;
pub use student::create_student;
pub use teacher::create_teacher;
