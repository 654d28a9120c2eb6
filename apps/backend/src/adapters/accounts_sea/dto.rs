//! Data transfer objects for the accounts adapter.

use rust_decimal::Decimal;

/// Fields required to insert a new account row.
///
/// The store assigns `id` and the row timestamps; everything else is
/// caller-supplied, including the pre-generated account number.
#[derive(Debug, Clone)]
pub struct AccountCreate {
    pub first_name: String,
    pub last_name: String,
    pub account_number: i64,
    pub encrypted_password: String,
    pub balance: Decimal,
}
