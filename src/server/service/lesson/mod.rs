pub mod recurrence;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::lesson::{query::LessonQuery, LessonRepository},
    error::{
        store::{QueryError, WriteError},
        AppError,
    },
    model::lesson::{CreateLessonSeriesParams, Lesson, ListLessonsParams},
};

pub struct LessonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LessonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of lessons matching the listing filters
    ///
    /// # Arguments
    /// - `params`: Normalized listing filters
    ///
    /// # Returns
    /// - `Ok(Vec<Lesson>)`: Lessons ordered by date then id, empty when nothing matches
    /// - `Err(AppError::QueryErr)`: The composed read failed
    pub async fn list(&self, params: ListLessonsParams) -> Result<Vec<Lesson>, AppError> {
        let repo = LessonRepository::new(self.db);
        let query = LessonQuery::from_params(&params);

        let page = repo.find_page(&query).await.map_err(QueryError)?;

        Ok(page.into_iter().map(Lesson::from_with_relations).collect())
    }

    /// Generates the series dates and persists the lessons with their teacher assignments
    ///
    /// # Arguments
    /// - `params`: Normalized series request
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)`: Created lesson ids in date order; empty when no date matched
    /// - `Err(AppError::WriteErr)`: The series transaction failed and nothing was persisted
    pub async fn create_series(&self, params: CreateLessonSeriesParams) -> Result<Vec<i32>, AppError> {
        let dates = recurrence::generate(params.first_date, &params.days, params.bound, &params.caps);

        if dates.is_empty() {
            tracing::debug!("Series \"{}\" matched no dates, nothing to create", params.title);
            return Ok(Vec::new());
        }

        let repo = LessonRepository::new(self.db);
        let ids = repo
            .create_series(&params.title, &dates, &params.teacher_ids)
            .await
            .map_err(WriteError)?;

        tracing::info!(
            "Created series \"{}\" with {} lessons and {} teachers",
            params.title,
            ids.len(),
            params.teacher_ids.len()
        );

        Ok(ids)
    }
}
