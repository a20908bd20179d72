// ==========================================
// ADA Management - import layer
// ==========================================
// Reconciling import pipeline for institutional spreadsheets.
// Flow: read -> validate -> resolve columns -> reconcile rows.
// Supports: CSV (';' delimited), XLSX (first sheet).
// ==========================================

pub mod error;
pub mod file_parser;
pub mod header_map;
pub mod import_service;
pub mod reconciler;

pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvSheetReader, TabularReader, XlsxSheetReader};
pub use header_map::{HeaderMap, SheetColumn};
pub use import_service::ImportService;
pub use reconciler::{parse_int_lenient, RowOutcome, RowReconciler};
