// ==========================================
// ADA Management - academic domain model
// ==========================================
// Four entities reconciled by the import core. Each carries an
// opaque surrogate id assigned by the store on first insert
// (0 = not yet persisted), audit timestamps, and a soft-delete
// marker. Natural keys (course code, term code, registration,
// (student, semester)) drive all upsert matching.
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Course
// ==========================================
// Natural key: institutional course code.
// Name/coordinator are overwritten on re-import only when they
// actually changed; the code is immutable once set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub code: i64,
    pub name: String,
    pub coordinator: String,

    // ===== audit fields =====
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Course {
    /// New in-memory course, not yet persisted.
    pub fn new(code: i64, name: impl Into<String>, coordinator: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            code,
            name: name.into(),
            coordinator: coordinator.into(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

// ==========================================
// Semester
// ==========================================
// Natural key: term code (e.g. "2025/1").
// Immutable after creation; the import never updates a semester.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Semester {
    pub id: i64,
    pub code: String,

    // ===== audit fields =====
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Semester {
    pub fn new(code: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            code: code.into(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

// ==========================================
// Student
// ==========================================
// Natural key: registration number.
// The spreadsheet is authoritative for current state: every
// non-key attribute is fully overwritten on each import that
// mentions the student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub registration: String,
    pub name: String,
    pub entry_year: i64,
    pub entry_period: String,
    pub quota_type: String,
    pub course_id: i64,

    // ===== audit fields =====
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Student {
    /// New in-memory student with only the natural key set.
    pub fn new(registration: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            registration: registration.into(),
            name: String::new(),
            entry_year: 0,
            entry_period: String::new(),
            quota_type: String::new(),
            course_id: 0,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

// ==========================================
// AcademicRecord
// ==========================================
// Per-student-per-term standing snapshot.
// Composite natural key: (student_id, semester_id) - at most one
// record per student per semester. Fully overwritten on every
// import touching the pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcademicRecord {
    pub id: i64,
    pub student_id: i64,
    pub semester_id: i64,

    // ===== standing classification =====
    pub status: String,        // e.g. "Em regularidade"
    pub status_detail: String, // follow-up annotation

    // ===== standing metrics =====
    pub integralized_hours: i64,
    pub total_hours: i64,
    pub pending_obligatory: i64, // missing mandatory courses
    pub semesters_no_hours: i64, // consecutive zero-credit-hour terms
    pub locks: i64,              // enrollment locks / withdrawals

    // ===== audit fields =====
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl AcademicRecord {
    /// New in-memory record keyed to an existing student and semester.
    pub fn new(student_id: i64, semester_id: i64) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            student_id,
            semester_id,
            status: String::new(),
            status_detail: String::new(),
            integralized_hours: 0,
            total_hours: 0,
            pending_obligatory: 0,
            semesters_no_hours: 0,
            locks: 0,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

// ==========================================
// ImportSummary
// ==========================================
// Operator-facing outcome of one import run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSummary {
    pub total_rows: usize,   // data rows read (header excluded)
    pub imported_rows: usize,
    pub skipped_rows: usize, // trailing-padding rows, not errors
    pub elapsed_ms: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entities_are_unpersisted() {
        assert_eq!(Course::new(10, "Engenharia", "Dr. Souza").id, 0);
        assert_eq!(Semester::new("2025/1").id, 0);
        assert_eq!(Student::new("2021001").id, 0);
        assert_eq!(AcademicRecord::new(1, 1).id, 0);
    }

    #[test]
    fn test_student_defaults() {
        let student = Student::new("2021001");
        assert_eq!(student.registration, "2021001");
        assert_eq!(student.entry_year, 0);
        assert!(student.name.is_empty());
        assert!(student.deleted_at.is_none());
    }
}
