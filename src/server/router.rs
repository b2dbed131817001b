use axum::{
    middleware::from_fn,
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    model::{
        api::ErrorDto,
        lesson::{
            CreateLessonSeriesDto, LessonDto, LessonStudentDto, LessonTeacherDto, ListLessonsDto,
        },
    },
    server::{
        controller::lesson::{self, create_lessons, list_lessons},
        middleware::content_type::require_json,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Lesson Scheduler API"),
    paths(lesson::list_lessons, lesson::create_lessons),
    components(schemas(
        ListLessonsDto,
        CreateLessonSeriesDto,
        LessonDto,
        LessonStudentDto,
        LessonTeacherDto,
        ErrorDto
    )),
    tags((name = lesson::LESSON_TAG, description = "Lesson listing and recurring series creation"))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    let lessons = Router::new()
        .route("/api/lessons", post(create_lessons))
        .route("/api/lessons/query", post(list_lessons))
        .route_layer(from_fn(require_json));

    Router::new()
        .merge(lessons)
        .route("/api/openapi.json", get(openapi))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
