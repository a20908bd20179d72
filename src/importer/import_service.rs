// ==========================================
// ADA Management - import orchestrator
// ==========================================
// Sequences reader -> file validation -> column resolution ->
// per-row reconciliation, and surfaces a single outcome for the
// whole batch.
//
// Row processing is strictly sequential in file order: later rows
// for the same student/semester must observe earlier rows' writes
// within the same run. There is no batch transaction; a failure
// partway through leaves previously reconciled rows committed.
// ==========================================

use crate::domain::ImportSummary;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::TabularReader;
use crate::importer::header_map::HeaderMap;
use crate::importer::reconciler::{RowOutcome, RowReconciler};
use crate::repository::AcademicRepository;
use std::time::Instant;
use tracing::{debug, info, instrument};

pub struct ImportService<R: AcademicRepository> {
    repo: R,
}

impl<R: AcademicRepository> ImportService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Import one uploaded spreadsheet.
    ///
    /// Returns the batch summary, or the first error encountered.
    /// Nothing is persisted before the header passes the mandatory
    /// column check.
    #[instrument(skip_all, fields(filename = %filename))]
    pub async fn import(&self, bytes: &[u8], filename: &str) -> ImportResult<ImportSummary> {
        let start_time = Instant::now();
        info!(size = bytes.len(), "starting spreadsheet import");

        // === Step 1: read the file into rows ===
        let rows = TabularReader::read(bytes, filename)?;
        debug!(rows = rows.len(), "file read");

        // === Step 2: file-level validation ===
        if rows.len() < 2 {
            return Err(ImportError::EmptyOrHeaderOnly);
        }

        // === Step 3: resolve columns from the header row ===
        let columns = HeaderMap::resolve(&rows[0])?;

        // === Step 4: reconcile data rows, sequentially ===
        let reconciler = RowReconciler::new(&self.repo, &columns);
        let mut imported_rows = 0usize;
        let mut skipped_rows = 0usize;
        for row in &rows[1..] {
            match reconciler.reconcile(row).await? {
                RowOutcome::Imported => imported_rows += 1,
                RowOutcome::SkippedPadding => skipped_rows += 1,
            }
        }

        let summary = ImportSummary {
            total_rows: rows.len() - 1,
            imported_rows,
            skipped_rows,
            elapsed_ms: start_time.elapsed().as_millis(),
        };

        info!(
            total = summary.total_rows,
            imported = summary.imported_rows,
            skipped = summary.skipped_rows,
            elapsed_ms = summary.elapsed_ms as u64,
            "spreadsheet import finished"
        );

        Ok(summary)
    }
}
