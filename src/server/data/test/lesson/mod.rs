use crate::{
    model::lesson::ListLessonsDto,
    server::{
        data::lesson::{query::LessonQuery, LessonRepository},
        model::lesson::ListLessonsParams,
    },
};
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create_series;
mod find_page;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Builds a listing query from a JSON request body.
fn query(body: serde_json::Value) -> LessonQuery {
    let dto: ListLessonsDto = serde_json::from_value(body).unwrap();
    LessonQuery::from_params(&ListLessonsParams::from_dto(dto).unwrap())
}
