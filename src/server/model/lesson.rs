//! Lesson domain models and parameters.
//!
//! Provides the normalized parameter types for listing lessons and for generating a
//! recurring lesson series, the recurrence descriptors consumed by the generator, and the
//! enriched lesson model returned by listing.
//!
//! Normalization is the second stage of request handling: compact encodings are decoded
//! by `server::util::parse`, then `from_dto` applies defaults, bounds, required fields and
//! the exactly-one-of constraint on already-typed values.

use chrono::{Months, NaiveDate, Weekday};
use std::collections::BTreeSet;

use crate::{
    model::lesson::{
        CreateLessonSeriesDto, LessonDto, LessonStudentDto, LessonTeacherDto, ListLessonsDto,
    },
    server::{
        error::validation::ValidationError,
        util::parse::{parse_date, parse_integer, parse_range, parse_set, InclusiveRange},
    },
};

/// Maximum number of lessons a single series request may create.
pub const LESSONS_MAX: usize = 300;

/// Maximum span of a count-bounded series, in months from its first date.
pub const INTERVAL_MAX_MONTHS: u32 = 12;

/// Maximum title length in characters.
pub const TITLE_MAX_CHARS: usize = 100;

const DEFAULT_PAGE: u64 = 1;
const DEFAULT_LESSONS_PER_PAGE: u64 = 5;

/// Set of weekdays a series is scheduled on.
///
/// Indexed the way clients send them: 0 = Sunday through 6 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Weekdays(u8);

impl Weekdays {
    /// Builds the set from Sunday-based indices.
    ///
    /// Returns `None` if any index is above 6. Repeated indices collapse.
    pub fn try_from_sunday_indices(indices: impl IntoIterator<Item = u8>) -> Option<Self> {
        indices
            .into_iter()
            .try_fold(0u8, |bits, index| (index < 7).then(|| bits | (1 << index)))
            .map(Self)
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & (1 << day.num_days_from_sunday()) != 0
    }

    /// Number of distinct weekdays in the set.
    pub fn len(&self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Weekday> for Weekdays {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .fold(0u8, |bits, day| bits | (1 << day.num_days_from_sunday())),
        )
    }
}

/// How a series ends: after a number of occurrences, or on a last date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesBound {
    Count(u32),
    LastDate(NaiveDate),
}

/// System safety caps applied to every generated series.
///
/// Not user-settable; they bound the work a single request can cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurrenceCaps {
    /// Upper bound on the number of generated occurrences.
    pub lessons_max: usize,
    /// Furthest date, relative to the first date, a count-bounded series may reach.
    pub interval_max: Months,
}

impl Default for RecurrenceCaps {
    fn default() -> Self {
        Self {
            lessons_max: LESSONS_MAX,
            interval_max: Months::new(INTERVAL_MAX_MONTHS),
        }
    }
}

/// Normalized lesson listing filters.
///
/// A `None` filter is omitted from the composed query entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct ListLessonsParams {
    pub date: Option<InclusiveRange<NaiveDate>>,
    pub status: Option<i16>,
    /// Sorted, duplicate-free teacher ids.
    pub teacher_ids: Option<Vec<i32>>,
    pub students_count: Option<InclusiveRange<i64>>,
    /// 1-based page number.
    pub page: u64,
    pub lessons_per_page: u64,
}

impl ListLessonsParams {
    /// Normalizes listing filters from the request DTO.
    ///
    /// # Returns
    /// - `Ok(ListLessonsParams)` - Filters with defaults applied (page 1, 5 per page)
    /// - `Err(ValidationError)` - A field is malformed or out of range
    pub fn from_dto(dto: ListLessonsDto) -> Result<Self, ValidationError> {
        let date = dto
            .date
            .map(|value| parse_range(&value).map_err(ValidationError::malformed("date")))
            .transpose()?;

        let status = dto
            .status
            .map(|value| {
                let status =
                    parse_integer(&value).map_err(ValidationError::malformed("status"))?;
                match status {
                    0 | 1 => Ok(status as i16),
                    _ => Err(ValidationError::invalid("status", "must be one of [0, 1]")),
                }
            })
            .transpose()?;

        let teacher_ids = dto
            .teacher_ids
            .map(|value| parse_set(&value).map_err(ValidationError::malformed("teacherIds")))
            .transpose()?;

        let students_count = dto
            .students_count
            .map(|value| {
                parse_range(&value).map_err(ValidationError::malformed("studentsCount"))
            })
            .transpose()?;

        let page = positive_or_default(dto.page, "page", DEFAULT_PAGE)?;
        let lessons_per_page =
            positive_or_default(dto.lessons_per_page, "lessonsPerPage", DEFAULT_LESSONS_PER_PAGE)?;

        // Offset and limit are bound as signed 64-bit values
        let offset_fits = lessons_per_page
            .checked_mul(page - 1)
            .is_some_and(|offset| offset <= i64::MAX as u64);
        if !offset_fits {
            return Err(ValidationError::invalid(
                "page",
                "is too large for the requested \"lessonsPerPage\"",
            ));
        }

        Ok(Self {
            date,
            status,
            teacher_ids,
            students_count,
            page,
            lessons_per_page,
        })
    }

    /// Number of rows to skip for the requested page. Never exceeds `i64::MAX`.
    pub fn offset(&self) -> u64 {
        self.lessons_per_page * (self.page - 1)
    }
}

fn positive_or_default(
    value: Option<serde_json::Value>,
    field: &'static str,
    default: u64,
) -> Result<u64, ValidationError> {
    let Some(value) = value else {
        return Ok(default);
    };

    let parsed = parse_integer(&value).map_err(ValidationError::malformed(field))?;

    u64::try_from(parsed)
        .ok()
        .filter(|v| *v >= 1)
        .ok_or_else(|| ValidationError::invalid(field, "must be greater than or equal to 1"))
}

/// Normalized request to generate a recurring lesson series.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateLessonSeriesParams {
    /// Sorted, duplicate-free teacher ids; empty means no assignments.
    pub teacher_ids: Vec<i32>,
    pub title: String,
    pub days: Weekdays,
    pub first_date: NaiveDate,
    pub bound: SeriesBound,
    pub caps: RecurrenceCaps,
}

impl CreateLessonSeriesParams {
    /// Normalizes a series request from the request DTO.
    ///
    /// Injects the system caps; they cannot be set by the caller.
    ///
    /// # Returns
    /// - `Ok(CreateLessonSeriesParams)` - Valid series request
    /// - `Err(ValidationError)` - A required field is missing, a field is out of range, or
    ///   not exactly one of `lessonsCount` and `lastDate` was given
    pub fn from_dto(dto: CreateLessonSeriesDto) -> Result<Self, ValidationError> {
        let teacher_ids = dto
            .teacher_ids
            .unwrap_or_default()
            .into_iter()
            .map(|id| {
                i32::try_from(id)
                    .map_err(|_| ValidationError::invalid("teacherIds", "must only contain valid ids"))
            })
            .collect::<Result<BTreeSet<i32>, _>>()?
            .into_iter()
            .collect();

        let title = dto.title.ok_or(ValidationError::Missing { field: "title" })?;
        match title.chars().count() {
            0 => return Err(ValidationError::invalid("title", "must not be empty")),
            n if n > TITLE_MAX_CHARS => {
                return Err(ValidationError::invalid(
                    "title",
                    format!("must be at most {} characters", TITLE_MAX_CHARS),
                ))
            }
            _ => {}
        }

        let days = dto.days.ok_or(ValidationError::Missing { field: "days" })?;
        if days.is_empty() {
            return Err(ValidationError::invalid("days", "must contain at least 1 day"));
        }
        if days.len() > 7 {
            return Err(ValidationError::invalid("days", "must contain at most 7 days"));
        }
        let days = days
            .into_iter()
            .map(|day| u8::try_from(day).ok())
            .collect::<Option<Vec<u8>>>()
            .and_then(Weekdays::try_from_sunday_indices)
            .ok_or_else(|| {
                ValidationError::invalid("days", "must only contain integers between 0 and 6")
            })?;

        let first_date = dto
            .first_date
            .ok_or(ValidationError::Missing { field: "firstDate" })?;
        let first_date =
            parse_date(&first_date).map_err(ValidationError::malformed("firstDate"))?;

        let bound = match (dto.lessons_count, dto.last_date) {
            (Some(count), None) => {
                if count < 1 {
                    return Err(ValidationError::invalid(
                        "lessonsCount",
                        "must be a positive integer",
                    ));
                }
                let count = u32::try_from(count).map_err(|_| {
                    ValidationError::invalid("lessonsCount", format!("must be at most {}", u32::MAX))
                })?;
                SeriesBound::Count(count)
            }
            (None, Some(last_date)) => {
                let last_date =
                    parse_date(&last_date).map_err(ValidationError::malformed("lastDate"))?;
                if last_date < first_date {
                    return Err(ValidationError::invalid(
                        "lastDate",
                        "must be on or after \"firstDate\"",
                    ));
                }
                SeriesBound::LastDate(last_date)
            }
            _ => {
                return Err(ValidationError::ExactlyOneOf {
                    first: "lessonsCount",
                    second: "lastDate",
                })
            }
        };

        Ok(Self {
            teacher_ids,
            title,
            days,
            first_date,
            bound,
            caps: RecurrenceCaps::default(),
        })
    }
}

/// Enrolled student with their attendance flag for one lesson.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonStudent {
    pub id: i32,
    pub name: String,
    pub visit: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LessonTeacher {
    pub id: i32,
    pub name: String,
}

/// Entity models for one lesson and its related rows, as loaded by the repository.
#[derive(Debug, Clone)]
pub struct LessonWithRelations {
    pub lesson: entity::lesson::Model,
    /// Attendance rows joined with their student, ordered by student id.
    pub attendance: Vec<(entity::lesson_student::Model, entity::student::Model)>,
    /// Assigned teachers, ordered by id, restricted to the requested teachers if any.
    pub teachers: Vec<entity::teacher::Model>,
}

/// A lesson enriched with attendance aggregates and teachers.
#[derive(Debug, Clone, PartialEq)]
pub struct Lesson {
    pub id: i32,
    pub date: NaiveDate,
    pub title: String,
    pub status: i16,
    /// Number of attendance rows, used by the `studentsCount` filter.
    pub students_count: i64,
    /// Number of attendance rows with the visit flag set.
    pub visit_count: i64,
    pub students: Vec<LessonStudent>,
    pub teachers: Vec<LessonTeacher>,
}

impl Lesson {
    /// Converts entity models to a domain model at the repository boundary, computing
    /// the attendance aggregates.
    pub fn from_with_relations(relations: LessonWithRelations) -> Self {
        let LessonWithRelations {
            lesson,
            attendance,
            teachers,
        } = relations;

        let students: Vec<LessonStudent> = attendance
            .into_iter()
            .map(|(row, student)| LessonStudent {
                id: student.id,
                name: student.name,
                visit: row.visit,
            })
            .collect();

        Self {
            id: lesson.id,
            date: lesson.date,
            title: lesson.title,
            status: lesson.status,
            students_count: students.len() as i64,
            visit_count: students.iter().filter(|s| s.visit).count() as i64,
            students,
            teachers: teachers
                .into_iter()
                .map(|t| LessonTeacher {
                    id: t.id,
                    name: t.name,
                })
                .collect(),
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> LessonDto {
        LessonDto {
            id: self.id,
            date: self.date,
            title: self.title,
            status: self.status,
            visit_count: self.visit_count,
            students: self
                .students
                .into_iter()
                .map(|s| LessonStudentDto {
                    id: s.id,
                    name: s.name,
                    visit: s.visit,
                })
                .collect(),
            teachers: self
                .teachers
                .into_iter()
                .map(|t| LessonTeacherDto {
                    id: t.id,
                    name: t.name,
                })
                .collect(),
        }
    }
}
