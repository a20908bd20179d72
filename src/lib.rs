// ==========================================
// ADA Management - core library
// ==========================================
// Student academic standing management: reconciling import of
// institutional spreadsheets into a normalized SQLite store.
// Stack: Rust + SQLite
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities
pub mod domain;

// Repository layer - data access
pub mod repository;

// Import layer - external data
pub mod importer;

// Configuration
pub mod config;

// Database infrastructure (connection init / PRAGMA / schema)
pub mod db;

// Logging
pub mod logging;

// ==========================================
// Re-exports
// ==========================================

// Domain entities
pub use domain::{AcademicRecord, Course, ImportSummary, Semester, Student};

// Import pipeline
pub use importer::{ImportError, ImportService, SheetColumn, TabularReader};

// Repositories
pub use repository::{AcademicRepository, RepositoryError, SqliteAcademicRepository};

// ==========================================
// Constants
// ==========================================

// System version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// System name
pub const APP_NAME: &str = "ADA Management";
