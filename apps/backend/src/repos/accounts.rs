//! Account repository functions for the domain layer (generic over ConnectionTrait).

use rust_decimal::Decimal;
use sea_orm::ConnectionTrait;

use crate::adapters::accounts_sea as accounts_adapter;
use crate::adapters::accounts_sea::AccountCreate;
use crate::error::AppError;

/// Account domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Externally-addressable identity bound into tokens; a different
    /// identifier space than the surrogate `id`.
    pub account_number: i64,
    pub encrypted_password: String,
    pub balance: Decimal,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

/// Fields the caller supplies when creating an account. The store assigns
/// only the surrogate id.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub account_number: i64,
    pub encrypted_password: String,
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    new_account: NewAccount,
) -> Result<Account, AppError> {
    let model = accounts_adapter::insert_account(
        conn,
        AccountCreate {
            first_name: new_account.first_name,
            last_name: new_account.last_name,
            account_number: new_account.account_number,
            encrypted_password: new_account.encrypted_password,
            balance: Decimal::ZERO,
        },
    )
    .await?;
    Ok(Account::from(model))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Account>, AppError> {
    let model = accounts_adapter::find_by_id(conn, id).await?;
    Ok(model.map(Account::from))
}

pub async fn find_by_number<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    number: i64,
) -> Result<Option<Account>, AppError> {
    let model = accounts_adapter::find_by_number(conn, number).await?;
    Ok(model.map(Account::from))
}

/// Idempotent: deleting an id with no matching row succeeds.
pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<(), AppError> {
    let rows = accounts_adapter::delete_by_id(conn, id).await?;
    if rows == 0 {
        tracing::debug!(account_id = id, "delete of absent account treated as success");
    }
    Ok(())
}

pub async fn list<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<Account>, AppError> {
    let models = accounts_adapter::list_accounts(conn).await?;
    Ok(models.into_iter().map(Account::from).collect())
}

// Conversion between the SeaORM model and the domain model

impl From<crate::entities::accounts::Model> for Account {
    fn from(model: crate::entities::accounts::Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            account_number: model.account_number,
            encrypted_password: model.encrypted_password,
            balance: model.balance,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
