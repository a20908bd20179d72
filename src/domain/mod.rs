// ==========================================
// ADA Management - domain layer
// ==========================================
// Entities persisted by the reconciliation core plus
// the operator-facing import summary.
// ==========================================

pub mod academic;

pub use academic::{AcademicRecord, Course, ImportSummary, Semester, Student};
