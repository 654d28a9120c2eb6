//! Account business operations.

use rand::Rng;
use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::auth::password;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::accounts::{self, Account, NewAccount};

/// Range for generated account numbers.
///
/// Generation is random with no uniqueness constraint in the store; a
/// collision would let two accounts share a token identity.
const ACCOUNT_NUMBER_MIN: i64 = 10_000_000;
const ACCOUNT_NUMBER_MAX: i64 = 100_000_000;

pub fn generate_account_number() -> i64 {
    rand::rng().random_range(ACCOUNT_NUMBER_MIN..ACCOUNT_NUMBER_MAX)
}

/// Create an account: generate its number, hash the credential, insert.
pub async fn create_account<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    first_name: &str,
    last_name: &str,
    password_plain: &str,
) -> Result<Account, AppError> {
    let encrypted_password = password::hash_password(password_plain)?;
    let account_number = generate_account_number();

    let account = accounts::create(
        conn,
        NewAccount {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            account_number,
            encrypted_password,
        },
    )
    .await?;

    info!(
        account_id = account.id,
        account_number = account.account_number,
        "account created"
    );
    Ok(account)
}

pub async fn get_account<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Account, AppError> {
    accounts::find_by_id(conn, id).await?.ok_or_else(|| {
        AppError::not_found(ErrorCode::AccountNotFound, format!("account {id} not found"))
    })
}

/// Delete by id. Deleting an id that no longer exists succeeds.
pub async fn delete_account<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<(), AppError> {
    accounts::delete_by_id(conn, id).await?;
    info!(account_id = id, "account deleted");
    Ok(())
}

pub async fn list_accounts<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Account>, AppError> {
    accounts::list(conn).await
}

/// Verify credentials and return the matching account.
///
/// Unknown account numbers and wrong passwords are indistinguishable to the
/// caller; the distinction is logged only.
pub async fn login<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    account_number: i64,
    password_plain: &str,
) -> Result<Account, AppError> {
    let account = match accounts::find_by_number(conn, account_number).await? {
        Some(account) => account,
        None => {
            debug!(account_number, "login rejected: unknown account number");
            return Err(AppError::invalid_credentials());
        }
    };

    if !password::verify_password(password_plain, &account.encrypted_password)? {
        debug!(account_id = account.id, "login rejected: password mismatch");
        return Err(AppError::invalid_credentials());
    }

    Ok(account)
}
