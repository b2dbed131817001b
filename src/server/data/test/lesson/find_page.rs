use super::*;
use serde_json::json;

/// Tests pagination over an 8-lesson set with the default page size.
///
/// Verifies that page 2 holds the 6th through 8th lessons in date order and that
/// page 3 is empty.
///
/// Expected: Ok with 3 lessons, then Ok with none
#[tokio::test]
async fn paginates_in_date_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lesson_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    // Insert out of order so ordering comes from the query
    for day in [8, 3, 6, 1, 7, 2, 5, 4] {
        factory::create_lesson(db, date(2024, 3, day)).await?;
    }

    let repo = LessonRepository::new(db);
    let page_two = repo.find_page(&query(json!({ "page": 2 }))).await?;
    let page_three = repo.find_page(&query(json!({ "page": 3 }))).await?;

    let dates: Vec<NaiveDate> = page_two.iter().map(|l| l.lesson.date).collect();
    assert_eq!(dates, vec![date(2024, 3, 6), date(2024, 3, 7), date(2024, 3, 8)]);
    assert!(page_three.is_empty());

    Ok(())
}

/// Tests that lessons on the same date are ordered by id.
///
/// Expected: Ok with ascending ids
#[tokio::test]
async fn breaks_date_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lesson_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_lesson(db, date(2024, 3, 1)).await?;
    let second = factory::create_lesson(db, date(2024, 3, 1)).await?;

    let repo = LessonRepository::new(db);
    let page = repo.find_page(&query(json!({}))).await?;

    let ids: Vec<i32> = page.iter().map(|l| l.lesson.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests the teacher filter's inner-join semantics.
///
/// A lesson only assigned teacher 3 must not appear when filtering by teacher 7, and a
/// lesson assigned both reports only the filtered teacher.
///
/// Expected: Ok with only the lesson assigned teacher 7
#[tokio::test]
async fn teacher_filter_excludes_unmatched_lessons() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lesson_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher_three = factory::teacher::TeacherFactory::new(db)
        .name("Teacher Three")
        .build()
        .await?;
    let teacher_seven = factory::teacher::TeacherFactory::new(db)
        .name("Teacher Seven")
        .build()
        .await?;

    let only_three = factory::create_lesson(db, date(2024, 3, 1)).await?;
    factory::assign_teacher(db, only_three.id, teacher_three.id).await?;

    let both = factory::create_lesson(db, date(2024, 3, 2)).await?;
    factory::assign_teacher(db, both.id, teacher_three.id).await?;
    factory::assign_teacher(db, both.id, teacher_seven.id).await?;

    factory::create_lesson(db, date(2024, 3, 3)).await?;

    let repo = LessonRepository::new(db);
    let page = repo
        .find_page(&query(json!({ "teacherIds": teacher_seven.id.to_string() })))
        .await?;

    assert_eq!(page.len(), 1);
    assert_eq!(page[0].lesson.id, both.id);
    assert_eq!(page[0].teachers.len(), 1);
    assert_eq!(page[0].teachers[0].id, teacher_seven.id);

    Ok(())
}

/// Tests that without a teacher filter lessons without assignments are included.
///
/// Expected: Ok with every lesson; unassigned lessons report no teachers or students
#[tokio::test]
async fn includes_unassigned_lessons_without_teacher_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lesson_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;
    let assigned = factory::create_lesson(db, date(2024, 3, 1)).await?;
    factory::assign_teacher(db, assigned.id, teacher.id).await?;
    let unassigned = factory::create_lesson(db, date(2024, 3, 2)).await?;

    let repo = LessonRepository::new(db);
    let page = repo.find_page(&query(json!({}))).await?;

    assert_eq!(page.len(), 2);
    assert_eq!(page[0].teachers.len(), 1);
    assert_eq!(page[1].lesson.id, unassigned.id);
    assert!(page[1].teachers.is_empty());
    assert!(page[1].attendance.is_empty());

    Ok(())
}

/// Tests attendance enrichment.
///
/// Verifies that attendance rows are grouped per lesson and ordered by student id.
///
/// Expected: Ok with students in id order carrying their visit flags
#[tokio::test]
async fn loads_attendance_ordered_by_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lesson_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ann = factory::create_student(db).await?;
    let bob = factory::create_student(db).await?;
    let lesson = factory::create_lesson(db, date(2024, 3, 1)).await?;
    factory::create_attendance(db, lesson.id, bob.id, false).await?;
    factory::create_attendance(db, lesson.id, ann.id, true).await?;

    let repo = LessonRepository::new(db);
    let page = repo.find_page(&query(json!({}))).await?;

    let students: Vec<(i32, bool)> = page[0]
        .attendance
        .iter()
        .map(|(row, student)| (student.id, row.visit))
        .collect();
    assert_eq!(students, vec![(ann.id, true), (bob.id, false)]);

    Ok(())
}

/// Tests the status and date range filters together.
///
/// Expected: Ok with only lessons of status 1 inside the inclusive range
#[tokio::test]
async fn filters_by_status_and_date_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lesson_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for day in 1..=5 {
        factory::lesson::LessonFactory::new(db)
            .date(date(2024, 3, day))
            .status(1)
            .build()
            .await?;
    }
    factory::create_lesson(db, date(2024, 3, 3)).await?;

    let repo = LessonRepository::new(db);
    let page = repo
        .find_page(&query(json!({
            "date": "2024-03-04,2024-03-02",
            "status": 1,
            "lessonsPerPage": 10
        })))
        .await?;

    let dates: Vec<NaiveDate> = page.iter().map(|l| l.lesson.date).collect();
    assert_eq!(dates, vec![date(2024, 3, 2), date(2024, 3, 3), date(2024, 3, 4)]);
    assert!(page.iter().all(|l| l.lesson.status == 1));

    Ok(())
}

/// Tests the attendance count range filter.
///
/// Expected: Ok with lessons whose attendance count is within the range, including 0
#[tokio::test]
async fn filters_by_students_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lesson_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let students = [
        factory::create_student(db).await?,
        factory::create_student(db).await?,
        factory::create_student(db).await?,
    ];

    let empty = factory::create_lesson(db, date(2024, 3, 1)).await?;
    let pair = factory::create_lesson(db, date(2024, 3, 2)).await?;
    let full = factory::create_lesson(db, date(2024, 3, 3)).await?;
    for student in &students[..2] {
        factory::create_attendance(db, pair.id, student.id, false).await?;
    }
    for student in &students {
        factory::create_attendance(db, full.id, student.id, true).await?;
    }

    let repo = LessonRepository::new(db);
    let two_or_more = repo
        .find_page(&query(json!({ "studentsCount": "2,3" })))
        .await?;
    let none = repo
        .find_page(&query(json!({ "studentsCount": 0 })))
        .await?;

    let ids: Vec<i32> = two_or_more.iter().map(|l| l.lesson.id).collect();
    assert_eq!(ids, vec![pair.id, full.id]);
    assert_eq!(none.len(), 1);
    assert_eq!(none[0].lesson.id, empty.id);

    Ok(())
}

/// Tests that identical queries without writes in between return identical results.
///
/// Expected: Ok with equal pages
#[tokio::test]
async fn repeated_queries_return_same_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lesson_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;
    let student = factory::create_student(db).await?;
    for day in 1..=4 {
        let lesson = factory::create_lesson(db, date(2024, 3, day)).await?;
        factory::assign_teacher(db, lesson.id, teacher.id).await?;
        factory::create_attendance(db, lesson.id, student.id, day % 2 == 0).await?;
    }

    let repo = LessonRepository::new(db);
    let listing = query(json!({ "teacherIds": [teacher.id], "lessonsPerPage": 3 }));
    let first: Vec<_> = repo
        .find_page(&listing)
        .await?
        .into_iter()
        .map(|l| (l.lesson, l.attendance, l.teachers))
        .collect();
    let second: Vec<_> = repo
        .find_page(&listing)
        .await?
        .into_iter()
        .map(|l| (l.lesson, l.attendance, l.teachers))
        .collect();

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);

    Ok(())
}
