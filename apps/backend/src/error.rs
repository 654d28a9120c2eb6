use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::errors::ErrorCode;

/// Wire shape of every error response: `{"error": string}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Auth rejection ({code}): {detail}")]
    Auth { code: ErrorCode, detail: String },
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Database unavailable")]
    DbUnavailable,
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Error code for logs. Never rendered into auth responses.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::Auth { code, .. } => *code,
            AppError::InvalidCredentials => ErrorCode::AuthInvalidCredentials,
            AppError::Db { .. } => ErrorCode::DbError,
            AppError::DbUnavailable => ErrorCode::DbUnavailable,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Internal { .. } => ErrorCode::InternalError,
        }
    }

    /// HTTP status for this error.
    ///
    /// Not-found intentionally maps to 400, not 404: that is the public
    /// contract of this API and it is pinned by tests.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::BAD_REQUEST,
            AppError::Auth { .. } => StatusCode::FORBIDDEN,
            AppError::InvalidCredentials => StatusCode::FORBIDDEN,
            AppError::Db { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::DbUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message rendered to the caller.
    ///
    /// Auth rejections are uniform regardless of which check failed, so the
    /// response never acts as an oracle; the precise sub-kind is logged.
    /// Server-side failures are likewise not described on the wire.
    fn public_detail(&self) -> String {
        match self {
            AppError::Validation { detail, .. } => detail.clone(),
            AppError::NotFound { detail, .. } => detail.clone(),
            AppError::Auth { .. } => "Access denied".to_string(),
            AppError::InvalidCredentials => "invalid credentials".to_string(),
            AppError::Db { .. } | AppError::DbUnavailable => "internal server error".to_string(),
            AppError::Config { .. } => "internal server error".to_string(),
            AppError::Internal { .. } => "internal server error".to_string(),
        }
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn auth(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Auth {
            code,
            detail: detail.into(),
        }
    }

    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials
    }

    pub fn db(detail: impl Into<String>) -> Self {
        Self::Db {
            detail: detail.into(),
        }
    }

    pub fn db_unavailable() -> Self {
        Self::DbUnavailable
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::config(format!("env var error: {e}"))
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::db(format!("db error: {e}"))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        if status.is_server_error() {
            error!(code = %self.code(), detail = %self, "request failed");
        } else {
            warn!(code = %self.code(), detail = %self, "request rejected");
        }
        HttpResponse::build(status).json(ErrorBody {
            error: self.public_detail(),
        })
    }
}
