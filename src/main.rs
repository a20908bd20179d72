// ==========================================
// ADA Management - import entry point
// ==========================================
// Imports one institutional spreadsheet into the local store.
// Usage: ada-import <file.csv|file.xlsx>
// ==========================================

use ada_management::importer::ImportService;
use ada_management::repository::SqliteAcademicRepository;
use ada_management::{config, db, logging};
use std::path::Path;

#[tokio::main]
async fn main() {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - spreadsheet import", ada_management::APP_NAME);
    tracing::info!("version: {}", ada_management::VERSION);
    tracing::info!("==================================================");

    let file_arg = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            eprintln!("usage: ada-import <file.csv|file.xlsx>");
            std::process::exit(2);
        }
    };

    let db_path = config::default_db_path();
    tracing::info!("using database: {}", db_path);

    if let Err(e) = run(&db_path, &file_arg).await {
        tracing::error!(error = %e, "import failed");
        std::process::exit(1);
    }
}

async fn run(db_path: &str, file_arg: &str) -> anyhow::Result<()> {
    let conn = db::open_sqlite_connection(db_path)?;
    db::initialize_schema(&conn)?;

    let repo = SqliteAcademicRepository::from_connection(conn);
    let service = ImportService::new(repo);

    let bytes = std::fs::read(file_arg)?;
    let filename = Path::new(file_arg)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(file_arg);

    let summary = service.import(&bytes, filename).await?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
