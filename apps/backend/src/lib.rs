#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod auth;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;

// Re-exports for public API
pub use auth::jwt::{mint_account_token, verify_account_token, Claims};
pub use config::db::{database_url, DbProfile};
pub use error::AppError;
pub use extractors::account_id::AccountId;
pub use infra::db::{bootstrap_db, DbKind};
pub use infra::state::{build_state, StateBuilder};
pub use middleware::account_guard::{AccountGuard, TOKEN_HEADER};
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::test_logging::init();
}
