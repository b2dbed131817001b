//! Composition of the lesson listing query from normalized filters.
//!
//! Each supplied filter becomes one `LessonPredicate`. Predicates are combined with AND
//! and always bind their values as parameters.

use chrono::NaiveDate;
use sea_orm::{
    sea_query::{Expr, Func, Query, QueryStatementBuilder, SimpleExpr},
    ColumnTrait, QueryFilter, Select,
};

use crate::server::{model::lesson::ListLessonsParams, util::parse::InclusiveRange};

/// A single filter applied to the lesson listing.
#[derive(Debug, Clone, PartialEq)]
pub enum LessonPredicate {
    /// Lesson date within the inclusive range.
    DateBetween(InclusiveRange<NaiveDate>),
    StatusEq(i16),
    /// Number of attendance rows within the inclusive range.
    StudentsCountBetween(InclusiveRange<i64>),
    /// At least one assignment to one of the given teachers.
    HasTeacherIn(Vec<i32>),
}

/// A composed lesson listing: predicates, page window and teacher restriction.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonQuery {
    pub predicates: Vec<LessonPredicate>,
    /// Teachers to report per lesson; `None` reports every assigned teacher.
    pub teacher_ids: Option<Vec<i32>>,
    pub offset: u64,
    pub limit: u64,
}

impl LessonQuery {
    pub fn from_params(params: &ListLessonsParams) -> Self {
        let mut predicates = Vec::new();

        if let Some(date) = params.date {
            predicates.push(LessonPredicate::DateBetween(date));
        }
        if let Some(status) = params.status {
            predicates.push(LessonPredicate::StatusEq(status));
        }
        if let Some(students_count) = params.students_count {
            predicates.push(LessonPredicate::StudentsCountBetween(students_count));
        }
        if let Some(teacher_ids) = &params.teacher_ids {
            predicates.push(LessonPredicate::HasTeacherIn(teacher_ids.clone()));
        }

        Self {
            predicates,
            teacher_ids: params.teacher_ids.clone(),
            offset: params.offset(),
            limit: params.lessons_per_page,
        }
    }

    /// Adds every predicate to the select as a WHERE condition.
    pub fn apply(&self, select: Select<entity::lesson::Entity>) -> Select<entity::lesson::Entity> {
        self.predicates
            .iter()
            .fold(select, |select, predicate| predicate.apply(select))
    }
}

impl LessonPredicate {
    fn apply(&self, select: Select<entity::lesson::Entity>) -> Select<entity::lesson::Entity> {
        use entity::lesson::Column;

        match self {
            Self::DateBetween(range) => select.filter(Column::Date.between(range.min, range.max)),
            Self::StatusEq(status) => select.filter(Column::Status.eq(*status)),
            Self::StudentsCountBetween(range) => {
                use entity::lesson_student::{Column as Attendance, Entity as LessonStudent};
                use sea_orm::sea_query::ExprTrait;

                let students_count = Query::select()
                    .expr(Func::count(Expr::col((LessonStudent, Attendance::Id))))
                    .from(LessonStudent)
                    .and_where(
                        Expr::col((LessonStudent, Attendance::LessonId))
                            .equals((entity::lesson::Entity, Column::Id)),
                    )
                    .to_owned();

                select.filter(
                    Expr::expr(SimpleExpr::SubQuery(
                        None,
                        Box::new(students_count.into_sub_query_statement()),
                    ))
                    .between(range.min, range.max),
                )
            }
            Self::HasTeacherIn(teacher_ids) => select.filter(
                Column::Id.in_subquery(
                    Query::select()
                        .column(entity::lesson_teacher::Column::LessonId)
                        .from(entity::lesson_teacher::Entity)
                        .and_where(
                            entity::lesson_teacher::Column::TeacherId
                                .is_in(teacher_ids.iter().copied()),
                        )
                        .to_owned(),
                ),
            ),
        }
    }
}
