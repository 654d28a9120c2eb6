//! Token helpers for tests

use std::time::{Duration, SystemTime};

use backend::auth::jwt::mint_account_token;
use backend::state::security_config::SecurityConfig;

/// Mint a token bound to the given account number.
pub fn mint_test_token(account_number: i64, sec: &SecurityConfig) -> String {
    mint_account_token(account_number, SystemTime::now(), sec)
        .expect("should mint token successfully")
}

/// Mint a token whose expiry is already in the past.
pub fn mint_expired_token(account_number: i64, sec: &SecurityConfig) -> String {
    let past = SystemTime::now()
        .checked_sub(Duration::from_secs(7200))
        .unwrap();
    mint_account_token(account_number, past, sec).expect("should mint expired token successfully")
}

/// Corrupt the signature segment of a token, keeping it valid base64url.
/// The first signature character is flipped so the decoded bytes change.
pub fn tamper_signature(token: &str) -> String {
    let (head, sig) = token
        .rsplit_once('.')
        .expect("token should have three segments");
    let flipped = if sig.starts_with('A') { "B" } else { "A" };
    format!("{head}.{}{}", flipped, &sig[1..])
}
