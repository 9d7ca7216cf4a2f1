//! Shared test infrastructure.

use storage_api::infra::Database;

/// Fresh in-memory SQLite database with migrations applied.
///
/// A single pooled connection keeps the in-memory schema alive for the
/// whole test.
pub async fn test_database() -> Database {
    let db = Database::open("sqlite::memory:", 1)
        .await
        .expect("in-memory database should open");
    db.run_migrations()
        .await
        .expect("migrations should apply");
    db
}
