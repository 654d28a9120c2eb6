//! Database bootstrap: connect and bring the schema up to date.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{database_url, DbProfile};
use crate::error::AppError;

/// Which backing database to connect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DbKind {
    /// PostgreSQL via DATABASE_URL
    Postgres,
    /// Private in-memory SQLite database, used by tests
    SqliteMemory,
}

/// Connect and run pending migrations. Single entrypoint used by both the
/// server binary and the test state builder; migrations are idempotent.
pub async fn bootstrap_db(profile: DbProfile, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let conn = match kind {
        DbKind::Postgres => {
            let url = database_url(profile)?;
            Database::connect(&url).await?
        }
        DbKind::SqliteMemory => {
            // Single connection: every pooled handle must see the same
            // in-memory database.
            let mut opts = ConnectOptions::new("sqlite::memory:".to_string());
            opts.max_connections(1);
            Database::connect(opts).await?
        }
    };

    Migrator::up(&conn, None).await?;
    info!(?kind, "database ready");
    Ok(conn)
}
