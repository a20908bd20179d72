// ==========================================
// AcademicRepository integration tests
// ==========================================
// Upsert primitives against a real SQLite file.
// ==========================================


use ada_management::domain::{AcademicRecord, Course, Student};
use ada_management::repository::{
    AcademicRepository, RepositoryError, SqliteAcademicRepository,
};
use test_helpers::create_test_db;

fn create_repo(db_path: &str) -> SqliteAcademicRepository {
    SqliteAcademicRepository::new(db_path).expect("failed to create repository")
}

#[tokio::test]
async fn test_course_create_and_find_by_code() {
    let (_dir, db_path) = create_test_db();
    let repo = create_repo(&db_path);

    assert!(repo.find_course_by_code(10).await.unwrap().is_none());

    let created = repo
        .create_course(Course::new(10, "Engenharia", "Dr. Souza"))
        .await
        .unwrap();
    assert!(created.id > 0);

    let found = repo.find_course_by_code(10).await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.name, "Engenharia");
    assert_eq!(repo.count_courses().await.unwrap(), 1);
}

#[tokio::test]
async fn test_soft_deleted_rows_are_invisible() {
    let (_dir, db_path) = create_test_db();
    let repo = create_repo(&db_path);

    repo.create_course(Course::new(10, "Engenharia", "Dr. Souza"))
        .await
        .unwrap();
    assert_eq!(repo.count_courses().await.unwrap(), 1);

    let conn = test_helpers::open_verification_conn(&db_path);
    conn.execute(
        "UPDATE course SET deleted_at = '2025-01-01T00:00:00Z' WHERE code = 10",
        [],
    )
    .unwrap();

    assert_eq!(repo.count_courses().await.unwrap(), 0);
    assert!(repo.find_course_by_code(10).await.unwrap().is_none());
}

#[tokio::test]
async fn test_course_code_unique_constraint() {
    let (_dir, db_path) = create_test_db();
    let repo = create_repo(&db_path);

    repo.create_course(Course::new(10, "Engenharia", "Dr. Souza"))
        .await
        .unwrap();
    let result = repo
        .create_course(Course::new(10, "Outra", "Dr. Lima"))
        .await;
    assert!(matches!(
        result,
        Err(RepositoryError::UniqueConstraintViolation(_))
    ));
}

#[tokio::test]
async fn test_course_update_overwrites_mutable_fields() {
    let (_dir, db_path) = create_test_db();
    let repo = create_repo(&db_path);

    let mut course = repo
        .create_course(Course::new(10, "Engenharia", "Dr. Souza"))
        .await
        .unwrap();
    course.name = "Engenharia Civil".to_string();
    course.coordinator = "Dra. Lima".to_string();
    repo.update_course(&course).await.unwrap();

    let found = repo.find_course_by_code(10).await.unwrap().unwrap();
    assert_eq!(found.name, "Engenharia Civil");
    assert_eq!(found.coordinator, "Dra. Lima");
    assert_eq!(found.code, 10, "code is immutable");
}

#[tokio::test]
async fn test_find_or_create_semester_is_stable() {
    let (_dir, db_path) = create_test_db();
    let repo = create_repo(&db_path);

    let first = repo.find_or_create_semester("2025/1").await.unwrap();
    let second = repo.find_or_create_semester("2025/1").await.unwrap();
    assert_eq!(first.id, second.id);
    assert_eq!(repo.count_semesters().await.unwrap(), 1);

    let other = repo.find_or_create_semester("2025/2").await.unwrap();
    assert_ne!(other.id, first.id);
    assert_eq!(repo.count_semesters().await.unwrap(), 2);
}

#[tokio::test]
async fn test_save_student_inserts_then_updates() {
    let (_dir, db_path) = create_test_db();
    let repo = create_repo(&db_path);

    let course = repo
        .create_course(Course::new(10, "Engenharia", "Dr. Souza"))
        .await
        .unwrap();

    let mut student = Student::new("2021001");
    student.name = "Maria Silva".to_string();
    student.entry_year = 2021;
    student.course_id = course.id;

    let saved = repo.save_student(student).await.unwrap();
    assert!(saved.id > 0);

    let mut reloaded = repo
        .find_student_by_registration("2021001")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.id, saved.id);

    reloaded.name = "Maria S. Silva".to_string();
    repo.save_student(reloaded).await.unwrap();

    assert_eq!(repo.count_students().await.unwrap(), 1);
    let after = repo
        .find_student_by_registration("2021001")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after.name, "Maria S. Silva");
}

#[tokio::test]
async fn test_save_record_upserts_by_composite_key() {
    let (_dir, db_path) = create_test_db();
    let repo = create_repo(&db_path);

    let course = repo
        .create_course(Course::new(10, "Engenharia", "Dr. Souza"))
        .await
        .unwrap();
    let semester = repo.find_or_create_semester("2025/1").await.unwrap();
    let mut student = Student::new("2021001");
    student.course_id = course.id;
    let student = repo.save_student(student).await.unwrap();

    assert!(repo
        .find_record(student.id, semester.id)
        .await
        .unwrap()
        .is_none());

    let mut record = AcademicRecord::new(student.id, semester.id);
    record.status = "Em regularidade".to_string();
    record.integralized_hours = 1200;
    let saved = repo.save_record(record).await.unwrap();
    assert!(saved.id > 0);

    let mut reloaded = repo
        .find_record(student.id, semester.id)
        .await
        .unwrap()
        .unwrap();
    reloaded.status = "Em acompanhamento".to_string();
    repo.save_record(reloaded).await.unwrap();

    assert_eq!(repo.count_records().await.unwrap(), 1);
    let after = repo
        .find_record(student.id, semester.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after.status, "Em acompanhamento");
    assert_eq!(after.integralized_hours, 1200);
}

#[tokio::test]
async fn test_record_requires_existing_student_and_semester() {
    let (_dir, db_path) = create_test_db();
    let repo = create_repo(&db_path);

    let record = AcademicRecord::new(999, 999);
    let result = repo.save_record(record).await;
    assert!(matches!(
        result,
        Err(RepositoryError::ForeignKeyViolation(_))
    ));
}
