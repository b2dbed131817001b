use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Filters for listing lessons.
///
/// Range and set fields use compact encodings: a comma-joined string (`"1,2"`), a single
/// number (`7`) or an array (`[1, 2]`). `null` is the same as leaving the field out.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ListLessonsDto {
    /// One date, or two comma-joined dates forming an inclusive range.
    #[schema(value_type = Option<String>, example = "2024-03-01,2024-03-31")]
    pub date: Option<Value>,
    /// Lesson status, 0 or 1.
    #[schema(value_type = Option<i32>, example = 1)]
    pub status: Option<Value>,
    /// Comma-joined teacher ids; only lessons taught by one of them are returned.
    #[schema(value_type = Option<String>, example = "1,2")]
    pub teacher_ids: Option<Value>,
    /// One count, or two comma-joined counts forming an inclusive range of enrolled students.
    #[schema(value_type = Option<String>, example = "1,10")]
    pub students_count: Option<Value>,
    /// 1-based page number, default 1.
    #[schema(value_type = Option<i64>, example = 1)]
    pub page: Option<Value>,
    /// Page size, default 5.
    #[schema(value_type = Option<i64>, example = 5)]
    pub lessons_per_page: Option<Value>,
}

/// Request to generate a recurring series of lessons.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateLessonSeriesDto {
    /// Teachers assigned to every generated lesson.
    pub teacher_ids: Option<Vec<i64>>,
    /// Lesson title, 1 to 100 characters.
    pub title: Option<String>,
    /// Weekdays to schedule on, 0 = Sunday through 6 = Saturday.
    pub days: Option<Vec<i64>>,
    /// First day of the series, `YYYY-MM-DD`.
    #[schema(example = "2024-03-01")]
    pub first_date: Option<String>,
    /// Number of lessons to create. Mutually exclusive with `lastDate`.
    pub lessons_count: Option<i64>,
    /// Last possible day of the series, `YYYY-MM-DD`. Mutually exclusive with `lessonsCount`.
    pub last_date: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct LessonStudentDto {
    pub id: i32,
    pub name: String,
    pub visit: bool,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct LessonTeacherDto {
    pub id: i32,
    pub name: String,
}

/// A lesson enriched with its attendance and teachers.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LessonDto {
    pub id: i32,
    pub date: NaiveDate,
    pub title: String,
    pub status: i16,
    /// Number of enrolled students who attended.
    pub visit_count: i64,
    pub students: Vec<LessonStudentDto>,
    pub teachers: Vec<LessonTeacherDto>,
}
