// ==========================================
// ADA Management - academic repository (SQLite)
// ==========================================
// rusqlite-backed implementation of AcademicRepository.
// The connection is shared behind Arc<Mutex<..>>; each method
// acquires the lock, runs its statement(s), and releases it.
// All queries are parameterized.
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::{AcademicRecord, Course, Semester, Student};
use crate::repository::academic_repo::AcademicRepository;
use crate::repository::error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// SqliteAcademicRepository
// ==========================================
pub struct SqliteAcademicRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteAcademicRepository {
    /// Open a repository on the database at `db_path`.
    ///
    /// The schema must already exist (see `db::initialize_schema`).
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        Ok(Self::from_connection(conn))
    }

    /// Wrap an already-configured connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    fn lock(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn count_rows(&self, sql: &'static str) -> RepositoryResult<i64> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row(sql, [], |row| row.get(0))?;
        Ok(count)
    }
}

// ===== row mappers =====

fn row_to_course(row: &Row) -> rusqlite::Result<Course> {
    Ok(Course {
        id: row.get(0)?,
        code: row.get(1)?,
        name: row.get(2)?,
        coordinator: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
        deleted_at: row.get(6)?,
    })
}

fn row_to_semester(row: &Row) -> rusqlite::Result<Semester> {
    Ok(Semester {
        id: row.get(0)?,
        code: row.get(1)?,
        created_at: row.get(2)?,
        updated_at: row.get(3)?,
        deleted_at: row.get(4)?,
    })
}

fn row_to_student(row: &Row) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(0)?,
        registration: row.get(1)?,
        name: row.get(2)?,
        entry_year: row.get(3)?,
        entry_period: row.get(4)?,
        quota_type: row.get(5)?,
        course_id: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
        deleted_at: row.get(9)?,
    })
}

fn row_to_record(row: &Row) -> rusqlite::Result<AcademicRecord> {
    Ok(AcademicRecord {
        id: row.get(0)?,
        student_id: row.get(1)?,
        semester_id: row.get(2)?,
        status: row.get(3)?,
        status_detail: row.get(4)?,
        integralized_hours: row.get(5)?,
        total_hours: row.get(6)?,
        pending_obligatory: row.get(7)?,
        semesters_no_hours: row.get(8)?,
        locks: row.get(9)?,
        created_at: row.get(10)?,
        updated_at: row.get(11)?,
        deleted_at: row.get(12)?,
    })
}

#[async_trait]
impl AcademicRepository for SqliteAcademicRepository {
    // ===== Course =====

    async fn find_course_by_code(&self, code: i64) -> RepositoryResult<Option<Course>> {
        let conn = self.lock()?;
        let course = conn
            .query_row(
                "SELECT id, code, name, coordinator, created_at, updated_at, deleted_at
                 FROM course WHERE code = ?1 AND deleted_at IS NULL",
                params![code],
                row_to_course,
            )
            .optional()?;
        Ok(course)
    }

    async fn create_course(&self, mut course: Course) -> RepositoryResult<Course> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO course (code, name, coordinator, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                course.code,
                course.name,
                course.coordinator,
                course.created_at,
                course.updated_at,
            ],
        )?;
        course.id = conn.last_insert_rowid();
        Ok(course)
    }

    async fn update_course(&self, course: &Course) -> RepositoryResult<()> {
        let conn = self.lock()?;
        let changed = conn.execute(
            "UPDATE course SET name = ?1, coordinator = ?2, updated_at = ?3
             WHERE id = ?4 AND deleted_at IS NULL",
            params![course.name, course.coordinator, Utc::now(), course.id],
        )?;
        if changed == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Course".to_string(),
                key: course.id.to_string(),
            });
        }
        Ok(())
    }

    // ===== Semester =====

    async fn find_or_create_semester(&self, code: &str) -> RepositoryResult<Semester> {
        let conn = self.lock()?;
        let existing = conn
            .query_row(
                "SELECT id, code, created_at, updated_at, deleted_at
                 FROM semester WHERE code = ?1 AND deleted_at IS NULL",
                params![code],
                row_to_semester,
            )
            .optional()?;

        if let Some(semester) = existing {
            return Ok(semester);
        }

        let mut semester = Semester::new(code);
        conn.execute(
            "INSERT INTO semester (code, created_at, updated_at) VALUES (?1, ?2, ?3)",
            params![semester.code, semester.created_at, semester.updated_at],
        )?;
        semester.id = conn.last_insert_rowid();
        Ok(semester)
    }

    // ===== Student =====

    async fn find_student_by_registration(
        &self,
        registration: &str,
    ) -> RepositoryResult<Option<Student>> {
        let conn = self.lock()?;
        let student = conn
            .query_row(
                "SELECT id, registration, name, entry_year, entry_period, quota_type,
                        course_id, created_at, updated_at, deleted_at
                 FROM student WHERE registration = ?1 AND deleted_at IS NULL",
                params![registration],
                row_to_student,
            )
            .optional()?;
        Ok(student)
    }

    async fn save_student(&self, mut student: Student) -> RepositoryResult<Student> {
        let conn = self.lock()?;
        if student.id == 0 {
            conn.execute(
                "INSERT INTO student (registration, name, entry_year, entry_period,
                                      quota_type, course_id, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    student.registration,
                    student.name,
                    student.entry_year,
                    student.entry_period,
                    student.quota_type,
                    student.course_id,
                    student.created_at,
                    student.updated_at,
                ],
            )?;
            student.id = conn.last_insert_rowid();
        } else {
            student.updated_at = Utc::now();
            let changed = conn.execute(
                "UPDATE student SET name = ?1, entry_year = ?2, entry_period = ?3,
                        quota_type = ?4, course_id = ?5, updated_at = ?6
                 WHERE id = ?7 AND deleted_at IS NULL",
                params![
                    student.name,
                    student.entry_year,
                    student.entry_period,
                    student.quota_type,
                    student.course_id,
                    student.updated_at,
                    student.id,
                ],
            )?;
            if changed == 0 {
                return Err(RepositoryError::NotFound {
                    entity: "Student".to_string(),
                    key: student.id.to_string(),
                });
            }
        }
        Ok(student)
    }

    // ===== AcademicRecord =====

    async fn find_record(
        &self,
        student_id: i64,
        semester_id: i64,
    ) -> RepositoryResult<Option<AcademicRecord>> {
        let conn = self.lock()?;
        let record = conn
            .query_row(
                "SELECT id, student_id, semester_id, status, status_detail,
                        integralized_hours, total_hours, pending_obligatory,
                        semesters_no_hours, locks, created_at, updated_at, deleted_at
                 FROM academic_record
                 WHERE student_id = ?1 AND semester_id = ?2 AND deleted_at IS NULL",
                params![student_id, semester_id],
                row_to_record,
            )
            .optional()?;
        Ok(record)
    }

    async fn save_record(&self, mut record: AcademicRecord) -> RepositoryResult<AcademicRecord> {
        let conn = self.lock()?;
        if record.id == 0 {
            conn.execute(
                "INSERT INTO academic_record (student_id, semester_id, status, status_detail,
                        integralized_hours, total_hours, pending_obligatory,
                        semesters_no_hours, locks, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
                params![
                    record.student_id,
                    record.semester_id,
                    record.status,
                    record.status_detail,
                    record.integralized_hours,
                    record.total_hours,
                    record.pending_obligatory,
                    record.semesters_no_hours,
                    record.locks,
                    record.created_at,
                    record.updated_at,
                ],
            )?;
            record.id = conn.last_insert_rowid();
        } else {
            record.updated_at = Utc::now();
            let changed = conn.execute(
                "UPDATE academic_record SET status = ?1, status_detail = ?2,
                        integralized_hours = ?3, total_hours = ?4, pending_obligatory = ?5,
                        semesters_no_hours = ?6, locks = ?7, updated_at = ?8
                 WHERE id = ?9 AND deleted_at IS NULL",
                params![
                    record.status,
                    record.status_detail,
                    record.integralized_hours,
                    record.total_hours,
                    record.pending_obligatory,
                    record.semesters_no_hours,
                    record.locks,
                    record.updated_at,
                    record.id,
                ],
            )?;
            if changed == 0 {
                return Err(RepositoryError::NotFound {
                    entity: "AcademicRecord".to_string(),
                    key: record.id.to_string(),
                });
            }
        }
        Ok(record)
    }

    // ===== verification helpers =====

    async fn count_courses(&self) -> RepositoryResult<i64> {
        self.count_rows("SELECT COUNT(*) FROM course WHERE deleted_at IS NULL")
    }

    async fn count_semesters(&self) -> RepositoryResult<i64> {
        self.count_rows("SELECT COUNT(*) FROM semester WHERE deleted_at IS NULL")
    }

    async fn count_students(&self) -> RepositoryResult<i64> {
        self.count_rows("SELECT COUNT(*) FROM student WHERE deleted_at IS NULL")
    }

    async fn count_records(&self) -> RepositoryResult<i64> {
        self.count_rows("SELECT COUNT(*) FROM academic_record WHERE deleted_at IS NULL")
    }
}
