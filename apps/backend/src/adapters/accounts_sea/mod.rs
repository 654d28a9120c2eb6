//! SeaORM adapter for the account store.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set,
};

use crate::entities::accounts;

pub mod dto;

pub use dto::AccountCreate;

// Adapter functions return DbErr; the repos layer maps into AppError.

pub async fn insert_account<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: AccountCreate,
) -> Result<accounts::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let account_active = accounts::ActiveModel {
        id: NotSet,
        first_name: Set(dto.first_name),
        last_name: Set(dto.last_name),
        account_number: Set(dto.account_number),
        encrypted_password: Set(dto.encrypted_password),
        balance: Set(dto.balance),
        created_at: Set(now),
        updated_at: Set(now),
    };

    account_active.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<accounts::Model>, sea_orm::DbErr> {
    accounts::Entity::find_by_id(id).one(conn).await
}

/// Lookup by the externally-addressable account number.
///
/// `.one()` keeps the result at most one row by query shape; uniqueness of
/// the number itself is owned by the caller side that generates it.
pub async fn find_by_number<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    number: i64,
) -> Result<Option<accounts::Model>, sea_orm::DbErr> {
    accounts::Entity::find()
        .filter(accounts::Column::AccountNumber.eq(number))
        .one(conn)
        .await
}

/// Delete by surrogate id, returning the number of rows removed.
pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = accounts::Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected)
}

/// All accounts, in store-defined order.
pub async fn list_accounts<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<accounts::Model>, sea_orm::DbErr> {
    accounts::Entity::find().all(conn).await
}
