// ==========================================
// ADA Management - row reconciler
// ==========================================
// Upserts the Course, Semester, Student and AcademicRecord a data
// row implies, in that dependency order. Course is the single
// conditional write (persisted only when name/coordinator
// changed); Student and AcademicRecord are overwritten in full on
// every row, the spreadsheet being authoritative for current
// state. Semesters are created on first sight and never updated.
//
// A persistence failure mid-row propagates immediately and ends
// the whole import; earlier writes of that row stay committed,
// matching the non-transactional contract of the legacy system.
// ==========================================

use crate::domain::{AcademicRecord, Course, Student};
use crate::importer::error::ImportResult;
use crate::importer::header_map::{HeaderMap, SheetColumn};
use crate::repository::AcademicRepository;
use tracing::debug;

/// Per-row outcome. Skipped rows are trailing blank padding, not
/// errors, and leave no side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    Imported,
    SkippedPadding,
}

/// Tolerant integer parser: institutional exports routinely carry
/// blanks or free text in numeric columns, which read as zero.
pub fn parse_int_lenient(value: &str) -> i64 {
    value.trim().parse::<i64>().unwrap_or(0)
}

pub struct RowReconciler<'a, R: AcademicRepository> {
    repo: &'a R,
    columns: &'a HeaderMap,
}

impl<'a, R: AcademicRepository> RowReconciler<'a, R> {
    pub fn new(repo: &'a R, columns: &'a HeaderMap) -> Self {
        Self { repo, columns }
    }

    pub async fn reconcile(&self, row: &[String]) -> ImportResult<RowOutcome> {
        // Rows shorter than the registration column are trailing
        // blank padding, common at the end of institutional CSVs.
        if row.len() < self.columns.registration_index() {
            debug!(row_len = row.len(), "skipping padding row");
            return Ok(RowOutcome::SkippedPadding);
        }

        let course = self.reconcile_course(row).await?;
        let semester = self
            .repo
            .find_or_create_semester(self.columns.cell(row, SheetColumn::BasePeriod))
            .await?;
        let student = self.reconcile_student(row, course.id).await?;
        self.reconcile_record(row, student.id, semester.id).await?;

        Ok(RowOutcome::Imported)
    }

    /// Course: upsert by code, persisting only when name or
    /// coordinator actually differ from the stored values.
    async fn reconcile_course(&self, row: &[String]) -> ImportResult<Course> {
        let code = parse_int_lenient(self.columns.cell(row, SheetColumn::CourseCode));
        let name = self.columns.cell(row, SheetColumn::CourseName);
        let coordinator = self.columns.cell(row, SheetColumn::CourseCoordinator);

        match self.repo.find_course_by_code(code).await? {
            None => {
                let course = self
                    .repo
                    .create_course(Course::new(code, name, coordinator))
                    .await?;
                debug!(code, course_id = course.id, "course created");
                Ok(course)
            }
            Some(mut course) => {
                if course.name != name || course.coordinator != coordinator {
                    course.name = name.to_string();
                    course.coordinator = coordinator.to_string();
                    self.repo.update_course(&course).await?;
                    debug!(code, course_id = course.id, "course updated");
                }
                Ok(course)
            }
        }
    }

    /// Student: find by registration or initialize in memory, then
    /// overwrite every non-key attribute and save in one step.
    async fn reconcile_student(&self, row: &[String], course_id: i64) -> ImportResult<Student> {
        let registration = self.columns.cell(row, SheetColumn::Registration);

        let mut student = self
            .repo
            .find_student_by_registration(registration)
            .await?
            .unwrap_or_else(|| Student::new(registration));

        student.name = self.columns.cell(row, SheetColumn::StudentName).to_string();
        student.entry_year = parse_int_lenient(self.columns.cell(row, SheetColumn::EntryYear));
        student.entry_period = self
            .columns
            .cell(row, SheetColumn::EntryPeriod)
            .to_string();
        student.quota_type = self.columns.cell(row, SheetColumn::QuotaType).to_string();
        student.course_id = course_id;

        Ok(self.repo.save_student(student).await?)
    }

    /// AcademicRecord: find by (student, semester) or initialize,
    /// then overwrite every status/metric field and save.
    async fn reconcile_record(
        &self,
        row: &[String],
        student_id: i64,
        semester_id: i64,
    ) -> ImportResult<AcademicRecord> {
        let mut record = self
            .repo
            .find_record(student_id, semester_id)
            .await?
            .unwrap_or_else(|| AcademicRecord::new(student_id, semester_id));

        record.status = self.columns.cell(row, SheetColumn::Status).to_string();
        record.status_detail = self
            .columns
            .cell(row, SheetColumn::StatusDetail)
            .to_string();
        record.integralized_hours =
            parse_int_lenient(self.columns.cell(row, SheetColumn::IntegralizedHours));
        record.total_hours = parse_int_lenient(self.columns.cell(row, SheetColumn::TotalHours));
        record.pending_obligatory =
            parse_int_lenient(self.columns.cell(row, SheetColumn::PendingObligatory));
        record.semesters_no_hours =
            parse_int_lenient(self.columns.cell(row, SheetColumn::SemestersNoHours));
        record.locks = parse_int_lenient(self.columns.cell(row, SheetColumn::Locks));

        Ok(self.repo.save_record(record).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_lenient_valid() {
        assert_eq!(parse_int_lenient("42"), 42);
        assert_eq!(parse_int_lenient(" 42 "), 42);
        assert_eq!(parse_int_lenient("-3"), -3);
    }

    #[test]
    fn test_parse_int_lenient_garbage_is_zero() {
        assert_eq!(parse_int_lenient(""), 0);
        assert_eq!(parse_int_lenient("abc"), 0);
        assert_eq!(parse_int_lenient("12abc"), 0);
    }
}
