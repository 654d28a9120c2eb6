use crate::config::db::DbProfile;
use crate::error::AppError;
use crate::infra::db::{bootstrap_db, DbKind};
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security_config: SecurityConfig,
    profile: DbProfile,
    db_kind: Option<DbKind>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::default(),
            profile: DbProfile::Test,
            db_kind: None,
        }
    }

    pub fn with_profile(mut self, profile: DbProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = Some(kind);
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        if let Some(kind) = self.db_kind {
            // single entrypoint: connect + migrate
            let conn = bootstrap_db(self.profile, kind).await?;
            Ok(AppState::new(conn, self.security_config))
        } else {
            Ok(AppState::new_without_db(self.security_config))
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
