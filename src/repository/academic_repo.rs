// ==========================================
// ADA Management - academic repository trait
// ==========================================
// Data access interface consumed by the import core.
// Repositories hold no business rules: the conditional-vs-
// unconditional overwrite decisions live in the reconciler,
// this trait only exposes find/create/update/save primitives
// keyed by natural keys.
// ==========================================

use crate::domain::{AcademicRecord, Course, Semester, Student};
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

// ==========================================
// AcademicRepository Trait
// ==========================================
// Implementor: SqliteAcademicRepository (rusqlite).
// All lookups ignore soft-deleted rows.
#[async_trait]
pub trait AcademicRepository: Send + Sync {
    // ===== Course =====

    /// Look up a course by its institutional code.
    async fn find_course_by_code(&self, code: i64) -> RepositoryResult<Option<Course>>;

    /// Insert a new course; returns it with the assigned id.
    async fn create_course(&self, course: Course) -> RepositoryResult<Course>;

    /// Overwrite name/coordinator of an existing course.
    async fn update_course(&self, course: &Course) -> RepositoryResult<()>;

    // ===== Semester =====

    /// Look up a semester by term code, creating it on first sight.
    /// Semesters are never updated after creation.
    async fn find_or_create_semester(&self, code: &str) -> RepositoryResult<Semester>;

    // ===== Student =====

    /// Look up a student by registration number.
    async fn find_student_by_registration(
        &self,
        registration: &str,
    ) -> RepositoryResult<Option<Student>>;

    /// Create-or-update in one step: inserts when `student.id == 0`,
    /// otherwise overwrites the stored row. Returns the student with
    /// its assigned id.
    async fn save_student(&self, student: Student) -> RepositoryResult<Student>;

    // ===== AcademicRecord =====

    /// Look up the standing record for (student, semester).
    async fn find_record(
        &self,
        student_id: i64,
        semester_id: i64,
    ) -> RepositoryResult<Option<AcademicRecord>>;

    /// Create-or-update in one step, same contract as `save_student`.
    async fn save_record(&self, record: AcademicRecord) -> RepositoryResult<AcademicRecord>;

    // ===== verification helpers =====

    async fn count_courses(&self) -> RepositoryResult<i64>;
    async fn count_semesters(&self) -> RepositoryResult<i64>;
    async fn count_students(&self) -> RepositoryResult<i64>;
    async fn count_records(&self) -> RepositoryResult<i64>;
}
