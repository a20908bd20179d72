// ==========================================
// ADA Management - configuration
// ==========================================
// Database location resolution: explicit env override first,
// then the user data directory, then a working-directory
// fallback.
// ==========================================

use std::path::PathBuf;

/// Resolve the database file path.
///
/// # Environment
/// - ADA_DB_PATH: explicit database path (debug/test/CI)
pub fn default_db_path() -> String {
    if let Ok(path) = std::env::var("ADA_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./ada.db");

    if let Some(data_dir) = dirs::data_dir() {
        path = data_dir.join("ada-management");
        if std::fs::create_dir_all(&path).is_ok() {
            path = path.join("ada.db");
        } else {
            path = PathBuf::from("./ada.db");
        }
    }

    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_db_path_is_db_file() {
        let path = default_db_path();
        assert!(!path.is_empty());
        assert!(path.ends_with(".db"));
    }
}
