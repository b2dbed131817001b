use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::de::DeserializeOwned;

use crate::{
    model::{
        api::ErrorDto,
        lesson::{CreateLessonSeriesDto, LessonDto, ListLessonsDto},
    },
    server::{
        error::AppError,
        model::lesson::{CreateLessonSeriesParams, ListLessonsParams},
        service::lesson::LessonService,
        state::AppState,
    },
};

/// Tag for grouping lesson endpoints in OpenAPI documentation
pub static LESSON_TAG: &str = "lesson";

/// Decodes a JSON request body, treating an empty body as an empty object.
fn decode_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        body
    };

    serde_json::from_slice(body).map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))
}

/// List lessons.
///
/// Returns one page of lessons matching every supplied filter, ordered by date and then
/// by id. Each lesson carries its visit count, its students with their visit flags and
/// its assigned teachers. An empty list is returned when nothing matches.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `body` - Listing filters (date, status, teacherIds, studentsCount, page, lessonsPerPage)
///
/// # Returns
/// - `200 OK` - Page of lessons
/// - `400 Bad Request` - Malformed body or invalid filter
/// - `415 Unsupported Media Type` - Body is not declared as JSON
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/lessons/query",
    tag = LESSON_TAG,
    request_body = ListLessonsDto,
    responses(
        (status = 200, description = "Successfully retrieved lessons", body = Vec<LessonDto>),
        (status = 400, description = "Invalid listing filters", body = ErrorDto),
        (status = 415, description = "Request body is not JSON", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_lessons(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let dto: ListLessonsDto = decode_body(&body)?;
    let params = ListLessonsParams::from_dto(dto)?;

    let service = LessonService::new(&state.db);

    let lessons = service.list(params).await?;

    let lessons: Vec<LessonDto> = lessons.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(lessons)))
}

/// Create a recurring lesson series.
///
/// Generates lessons on the given weekdays starting at `firstDate`, bounded by either
/// `lessonsCount` or `lastDate`, and assigns every listed teacher to every lesson. All
/// lessons and assignments are created atomically. At most 300 lessons are created and a
/// count-bounded series never extends past one year from `firstDate`.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `body` - Series request (teacherIds, title, days, firstDate, lessonsCount or lastDate)
///
/// # Returns
/// - `201 Created` - Ids of the created lessons in date order
/// - `400 Bad Request` - Malformed body or invalid series request
/// - `415 Unsupported Media Type` - Body is not declared as JSON
/// - `422 Unprocessable Entity` - A teacher id does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/lessons",
    tag = LESSON_TAG,
    request_body = CreateLessonSeriesDto,
    responses(
        (status = 201, description = "Successfully created lessons", body = Vec<i32>),
        (status = 400, description = "Invalid series request", body = ErrorDto),
        (status = 415, description = "Request body is not JSON", body = ErrorDto),
        (status = 422, description = "Unknown teacher id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_lessons(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let dto: CreateLessonSeriesDto = decode_body(&body)?;
    let params = CreateLessonSeriesParams::from_dto(dto)?;

    let service = LessonService::new(&state.db);

    let ids = service.create_series(params).await?;

    Ok((StatusCode::CREATED, Json(ids)))
}
