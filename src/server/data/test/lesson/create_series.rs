use super::*;
use crate::server::error::store::WriteError;

/// Tests creating a series with several teachers.
///
/// Verifies that one lesson is created per date in date order with status 0, and that
/// every teacher is assigned to every lesson.
///
/// Expected: Ok with 3 lesson ids and 6 assignment rows
#[tokio::test]
async fn creates_lessons_and_assignments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lesson_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_teacher(db).await?;
    let second = factory::create_teacher(db).await?;
    let dates = [date(2024, 3, 1), date(2024, 3, 8), date(2024, 3, 15)];

    let repo = LessonRepository::new(db);
    let ids = repo
        .create_series("Algebra", &dates, &[first.id, second.id])
        .await?;

    assert_eq!(ids.len(), 3);
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));

    for (id, expected_date) in ids.iter().zip(dates) {
        let lesson = entity::prelude::Lesson::find_by_id(*id)
            .one(db)
            .await?
            .unwrap();
        assert_eq!(lesson.date, expected_date);
        assert_eq!(lesson.title, "Algebra");
        assert_eq!(lesson.status, 0);

        let assigned = entity::prelude::LessonTeacher::find()
            .filter(entity::lesson_teacher::Column::LessonId.eq(*id))
            .count(db)
            .await?;
        assert_eq!(assigned, 2);
    }

    let total = entity::prelude::LessonTeacher::find().count(db).await?;
    assert_eq!(total, 6);

    Ok(())
}

/// Tests creating a series without teachers.
///
/// Expected: Ok with lessons created and no assignment rows
#[tokio::test]
async fn creates_lessons_without_teachers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lesson_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LessonRepository::new(db);
    let ids = repo
        .create_series("Reading", &[date(2024, 3, 4), date(2024, 3, 5)], &[])
        .await?;

    assert_eq!(ids.len(), 2);
    assert_eq!(entity::prelude::LessonTeacher::find().count(db).await?, 0);

    Ok(())
}

/// Tests that an empty date list is a no-op.
///
/// Expected: Ok with no ids and no rows
#[tokio::test]
async fn returns_empty_for_no_dates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lesson_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;

    let repo = LessonRepository::new(db);
    let ids = repo.create_series("Empty", &[], &[teacher.id]).await?;

    assert!(ids.is_empty());
    assert_eq!(entity::prelude::Lesson::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a failing assignment rolls back the whole series.
///
/// Assigns a teacher id that does not exist, which violates the foreign key after all
/// lessons have been inserted.
///
/// Expected: Err classified as unknown reference, no lessons or assignments persisted
#[tokio::test]
async fn rolls_back_everything_on_unknown_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lesson_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;

    let repo = LessonRepository::new(db);
    let result = repo
        .create_series(
            "Algebra",
            &[date(2024, 3, 1), date(2024, 3, 8)],
            &[teacher.id, teacher.id + 1000],
        )
        .await;

    let err = result.unwrap_err();
    assert!(WriteError(err).is_unknown_reference());
    assert_eq!(entity::prelude::Lesson::find().count(db).await?, 0);
    assert_eq!(entity::prelude::LessonTeacher::find().count(db).await?, 0);

    Ok(())
}

/// Tests a series whose assignments span several insert batches.
///
/// Expected: Ok with every (lesson, teacher) pair persisted
#[tokio::test]
async fn inserts_assignments_across_batches() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lesson_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_teacher(db).await?;
    let second = factory::create_teacher(db).await?;
    let dates: Vec<NaiveDate> = date(2024, 1, 1).iter_days().take(300).collect();

    let repo = LessonRepository::new(db);
    let ids = repo
        .create_series("Daily", &dates, &[first.id, second.id])
        .await?;

    assert_eq!(ids.len(), 300);
    assert_eq!(entity::prelude::LessonTeacher::find().count(db).await?, 600);

    let last_lesson_teachers = entity::prelude::LessonTeacher::find()
        .filter(entity::lesson_teacher::Column::LessonId.eq(ids[299]))
        .count(db)
        .await?;
    assert_eq!(last_lesson_teachers, 2);

    Ok(())
}
