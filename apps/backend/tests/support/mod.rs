pub mod app_builder;
pub mod auth;
pub mod factory;

use backend::infra::db::DbKind;
use backend::infra::state::build_state;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;

/// Fresh in-memory state with the given security config.
///
/// Uses the production StateBuilder, so the schema is migrated exactly the
/// way the server migrates it.
pub async fn sqlite_state(security: SecurityConfig) -> AppState {
    build_state()
        .with_db(DbKind::SqliteMemory)
        .with_security(security)
        .build()
        .await
        .expect("in-memory state should build")
}
