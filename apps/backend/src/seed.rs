//! Optional startup seeding (`--seed`).

use backend::db::require_db;
use backend::error::AppError;
use backend::services::accounts::create_account;
use backend::state::app_state::AppState;

/// Insert a demo account so a fresh database has something to log in with.
pub async fn seed_accounts(state: &AppState) -> Result<(), AppError> {
    let db = require_db(state)?;
    let account = create_account(db, "Uriel", "Hernandez", "pass23456").await?;

    println!(
        "seeded account {} (number {})",
        account.id, account.account_number
    );
    Ok(())
}
