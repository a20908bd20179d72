// ==========================================
// ADA Management - data repository layer
// ==========================================
// Red line: repositories contain no business logic.
// All queries are parameterized; soft-deleted rows are
// invisible to every lookup.
// ==========================================

pub mod academic_repo;
pub mod academic_repo_impl;
pub mod error;

pub use academic_repo::AcademicRepository;
pub use academic_repo_impl::SqliteAcademicRepository;
pub use error::{RepositoryError, RepositoryResult};
