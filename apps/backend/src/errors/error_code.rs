//! Error codes for the account backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in logs. Auth codes never reach the wire: the guard and the login
//! handler respond with a uniform message regardless of sub-kind.

use core::fmt;

/// Centralized error codes for the account backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// No token in the x-jwt-token header
    AuthMissingToken,
    /// Token signature did not verify (or wrong algorithm)
    AuthInvalidSignature,
    /// Token string could not be parsed
    AuthMalformedToken,
    /// Token expiry is in the past
    AuthExpiredToken,
    /// Path id did not parse inside the guard
    AuthInvalidPathId,
    /// Account addressed by the path could not be loaded
    AuthAccountLookup,
    /// Token's account number does not match the addressed account
    AuthOwnershipMismatch,
    /// Login with unknown number or wrong password
    AuthInvalidCredentials,

    // Request Validation
    /// Invalid account ID in the path
    InvalidAccountId,
    /// Empty or unusable name field
    InvalidName,
    /// Empty password on account creation
    InvalidPassword,

    // Resource Not Found
    /// Account not found
    AccountNotFound,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Configuration error
    ConfigError,
    /// Internal server error
    InternalError,
}

impl ErrorCode {
    /// Canonical SCREAMING_SNAKE_CASE string for this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::AuthMissingToken => "AUTH_MISSING_TOKEN",
            ErrorCode::AuthInvalidSignature => "AUTH_INVALID_SIGNATURE",
            ErrorCode::AuthMalformedToken => "AUTH_MALFORMED_TOKEN",
            ErrorCode::AuthExpiredToken => "AUTH_EXPIRED_TOKEN",
            ErrorCode::AuthInvalidPathId => "AUTH_INVALID_PATH_ID",
            ErrorCode::AuthAccountLookup => "AUTH_ACCOUNT_LOOKUP",
            ErrorCode::AuthOwnershipMismatch => "AUTH_OWNERSHIP_MISMATCH",
            ErrorCode::AuthInvalidCredentials => "AUTH_INVALID_CREDENTIALS",
            ErrorCode::InvalidAccountId => "INVALID_ACCOUNT_ID",
            ErrorCode::InvalidName => "INVALID_NAME",
            ErrorCode::InvalidPassword => "INVALID_PASSWORD",
            ErrorCode::AccountNotFound => "ACCOUNT_NOT_FOUND",
            ErrorCode::DbError => "DB_ERROR",
            ErrorCode::DbUnavailable => "DB_UNAVAILABLE",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::ErrorCode;

    const ALL: &[ErrorCode] = &[
        ErrorCode::AuthMissingToken,
        ErrorCode::AuthInvalidSignature,
        ErrorCode::AuthMalformedToken,
        ErrorCode::AuthExpiredToken,
        ErrorCode::AuthInvalidPathId,
        ErrorCode::AuthAccountLookup,
        ErrorCode::AuthOwnershipMismatch,
        ErrorCode::AuthInvalidCredentials,
        ErrorCode::InvalidAccountId,
        ErrorCode::InvalidName,
        ErrorCode::InvalidPassword,
        ErrorCode::AccountNotFound,
        ErrorCode::DbError,
        ErrorCode::DbUnavailable,
        ErrorCode::ConfigError,
        ErrorCode::InternalError,
    ];

    #[test]
    fn codes_are_unique_and_screaming_snake() {
        let mut seen = HashSet::new();
        for code in ALL {
            let s = code.as_str();
            assert!(seen.insert(s), "duplicate error code string: {s}");
            assert!(
                s.chars().all(|c| c.is_ascii_uppercase() || c == '_'),
                "code is not SCREAMING_SNAKE_CASE: {s}"
            );
        }
    }
}
