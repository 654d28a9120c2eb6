use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::errors::ErrorCode;
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Claims carried by account access tokens.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// The account number this token authorizes
    pub account_number: i64,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// Token lifetime: 15 minutes.
const TOKEN_TTL_SECS: i64 = 15 * 60;

/// Mint an HS256 access token bound to the given account number.
///
/// The account number claim round-trips verbatim; `iat` makes tokens for the
/// same account issued at different times distinct.
pub fn mint_account_token(
    account_number: i64,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time".to_string()))?
        .as_secs() as i64;

    let claims = Claims {
        account_number,
        iat,
        exp: iat + TOKEN_TTL_SECS,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify a token and return its claims.
///
/// The algorithm is pinned to the configured symmetric algorithm, so a token
/// signed any other way fails as an invalid signature. Expiry is checked
/// against wall-clock time.
pub fn verify_account_token(token: &str, security: &SecurityConfig) -> Result<Claims, AppError> {
    let validation = Validation::new(security.algorithm);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::auth(ErrorCode::AuthExpiredToken, "token expired")
        }
        jsonwebtoken::errors::ErrorKind::InvalidSignature
        | jsonwebtoken::errors::ErrorKind::InvalidAlgorithm => {
            AppError::auth(ErrorCode::AuthInvalidSignature, "signature did not verify")
        }
        _ => AppError::auth(ErrorCode::AuthMalformedToken, format!("unparseable token: {e}")),
    })
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime};

    use super::{mint_account_token, verify_account_token};
    use crate::errors::ErrorCode;
    use crate::state::security_config::SecurityConfig;
    use crate::AppError;

    #[test]
    fn test_mint_and_verify_roundtrip() {
        let security = SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes());

        let account_number = 48_215_937;
        let token = mint_account_token(account_number, SystemTime::now(), &security).unwrap();
        let claims = verify_account_token(&token, &security).unwrap();

        assert_eq!(claims.account_number, account_number);
        assert_eq!(claims.exp, claims.iat + 15 * 60);
    }

    #[test]
    fn test_expired_token() {
        let security = SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes());

        // 20 minutes ago so a 15-minute token is expired
        let past = SystemTime::now() - Duration::from_secs(20 * 60);
        let token = mint_account_token(11_111_111, past, &security).unwrap();

        match verify_account_token(&token, &security) {
            Err(AppError::Auth { code, .. }) => assert_eq!(code, ErrorCode::AuthExpiredToken),
            other => panic!("expected expired-token rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_signature() {
        let security_a = SecurityConfig::new("secret-A".as_bytes());
        let token = mint_account_token(22_222_222, SystemTime::now(), &security_a).unwrap();

        let security_b = SecurityConfig::new("secret-B".as_bytes());
        match verify_account_token(&token, &security_b) {
            Err(AppError::Auth { code, .. }) => assert_eq!(code, ErrorCode::AuthInvalidSignature),
            other => panic!("expected bad-signature rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_tampered_signature_segment() {
        let security = SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes());
        let token = mint_account_token(33_333_333, SystemTime::now(), &security).unwrap();

        // Flip the first character of the signature segment, keeping it
        // valid base64url while changing the decoded bytes.
        let (head, sig) = token.rsplit_once('.').unwrap();
        let flipped = if sig.starts_with('A') { "B" } else { "A" };
        let tampered = format!("{head}.{}{}", flipped, &sig[1..]);
        assert_ne!(token, tampered);

        assert!(verify_account_token(&tampered, &security).is_err());
    }

    #[test]
    fn test_malformed_token() {
        let security = SecurityConfig::default();
        match verify_account_token("not-a-token", &security) {
            Err(AppError::Auth { code, .. }) => assert_eq!(code, ErrorCode::AuthMalformedToken),
            other => panic!("expected malformed-token rejection, got {other:?}"),
        }
    }
}
