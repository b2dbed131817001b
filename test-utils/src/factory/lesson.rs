//! Lesson factory for seeding lessons without going through series generation.
//!
//! Listing tests need lessons with specific dates and statuses, including statuses
//! the series writer never produces, so this factory inserts rows directly.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test lessons with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let lesson = LessonFactory::new(&db)
///     .date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
///     .title("Algebra")
///     .status(1)
///     .build()
///     .await?;
/// ```
pub struct LessonFactory<'a> {
    db: &'a DatabaseConnection,
    date: NaiveDate,
    title: String,
    status: i16,
}

impl<'a> LessonFactory<'a> {
    /// Creates a new LessonFactory with default values.
    ///
    /// Defaults:
    /// - date: `2024-01-01`
    /// - title: `"Lesson {id}"` where id is auto-incremented
    /// - status: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            title: format!("Lesson {}", next_id()),
            status: 0,
        }
    }

    /// Sets the lesson date.
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets the lesson title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the lesson status.
    pub fn status(mut self, status: i16) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the lesson entity into the database.
    pub async fn build(self) -> Result<entity::lesson::Model, DbErr> {
        entity::lesson::ActiveModel {
            date: ActiveValue::Set(self.date),
            title: ActiveValue::Set(self.title),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a lesson on the given date with default title and status.
pub async fn create_lesson(
    db: &DatabaseConnection,
    date: NaiveDate,
) -> Result<entity::lesson::Model, DbErr> {
    LessonFactory::new(db).date(date).build().await
}
