pub mod query;

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::{data::lesson::query::LessonQuery, model::lesson::LessonWithRelations};

/// Maximum number of assignment rows sent in a single INSERT.
const ASSIGNMENT_BATCH_SIZE: usize = 500;

pub struct LessonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LessonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates one lesson per date and assigns every teacher to every lesson, atomically.
    ///
    /// Lessons are inserted in the given order with status 0, so ascending ids follow the
    /// order of `dates`. Assignments are inserted ordered by (lesson id, teacher id). If any
    /// insert fails the transaction is dropped without commit and nothing is persisted.
    ///
    /// # Arguments
    /// - `title` - Title shared by every lesson of the series
    /// - `dates` - Ascending lesson dates
    /// - `teacher_ids` - Teachers assigned to every lesson; may be empty
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Ids of the created lessons, in date order
    /// - `Err(DbErr)` - Insert or commit failed, including unknown teacher ids
    pub async fn create_series(
        &self,
        title: &str,
        dates: &[NaiveDate],
        teacher_ids: &[i32],
    ) -> Result<Vec<i32>, DbErr> {
        if dates.is_empty() {
            return Ok(Vec::new());
        }

        let txn = self.db.begin().await?;

        let mut lesson_ids = Vec::with_capacity(dates.len());
        for date in dates {
            let lesson = entity::lesson::ActiveModel {
                date: ActiveValue::Set(*date),
                title: ActiveValue::Set(title.to_string()),
                status: ActiveValue::Set(0),
                ..Default::default()
            }
            .insert(&txn)
            .await?;

            lesson_ids.push(lesson.id);
        }

        let assignments: Vec<entity::lesson_teacher::ActiveModel> = lesson_ids
            .iter()
            .flat_map(|lesson_id| {
                teacher_ids
                    .iter()
                    .map(move |teacher_id| entity::lesson_teacher::ActiveModel {
                        lesson_id: ActiveValue::Set(*lesson_id),
                        teacher_id: ActiveValue::Set(*teacher_id),
                        ..Default::default()
                    })
            })
            .collect();

        for batch in assignments.chunks(ASSIGNMENT_BATCH_SIZE) {
            entity::prelude::LessonTeacher::insert_many(batch.to_vec())
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        Ok(lesson_ids)
    }

    /// Gets one page of lessons matching the query, with attendance and teachers.
    ///
    /// Lessons are ordered by date, then id. The page read and both enrichment reads run
    /// in one transaction.
    ///
    /// # Returns
    /// - `Ok(Vec<LessonWithRelations>)` - The page, empty when nothing matches
    /// - `Err(DbErr)` - Database error during any of the reads
    pub async fn find_page(&self, query: &LessonQuery) -> Result<Vec<LessonWithRelations>, DbErr> {
        let txn = self.db.begin().await?;

        let lessons = query
            .apply(entity::prelude::Lesson::find())
            .order_by_asc(entity::lesson::Column::Date)
            .order_by_asc(entity::lesson::Column::Id)
            .offset(query.offset)
            .limit(query.limit)
            .all(&txn)
            .await?;

        if lessons.is_empty() {
            txn.commit().await?;
            return Ok(Vec::new());
        }

        let lesson_ids: Vec<i32> = lessons.iter().map(|lesson| lesson.id).collect();

        let attendance = entity::prelude::LessonStudent::find()
            .filter(entity::lesson_student::Column::LessonId.is_in(lesson_ids.clone()))
            .find_also_related(entity::prelude::Student)
            .order_by_asc(entity::lesson_student::Column::StudentId)
            .order_by_asc(entity::lesson_student::Column::Id)
            .all(&txn)
            .await?;

        let mut assignments = entity::prelude::LessonTeacher::find()
            .filter(entity::lesson_teacher::Column::LessonId.is_in(lesson_ids));
        if let Some(teacher_ids) = &query.teacher_ids {
            assignments = assignments
                .filter(entity::lesson_teacher::Column::TeacherId.is_in(teacher_ids.clone()));
        }
        let assignments = assignments
            .find_also_related(entity::prelude::Teacher)
            .order_by_asc(entity::lesson_teacher::Column::TeacherId)
            .all(&txn)
            .await?;

        txn.commit().await?;

        // Group related rows by lesson; both lists are already in their final order
        let mut attendance_map: HashMap<i32, Vec<_>> = HashMap::new();
        for (row, student) in attendance {
            if let Some(student) = student {
                attendance_map
                    .entry(row.lesson_id)
                    .or_default()
                    .push((row, student));
            }
        }

        let mut teacher_map: HashMap<i32, Vec<entity::teacher::Model>> = HashMap::new();
        for (row, teacher) in assignments {
            if let Some(teacher) = teacher {
                teacher_map.entry(row.lesson_id).or_default().push(teacher);
            }
        }

        Ok(lessons
            .into_iter()
            .map(|lesson| LessonWithRelations {
                attendance: attendance_map.remove(&lesson.id).unwrap_or_default(),
                teachers: teacher_map.remove(&lesson.id).unwrap_or_default(),
                lesson,
            })
            .collect())
    }
}
