//! Account factory for integration tests.

use backend::repos::accounts::Account;
use backend::services::accounts::create_account;
use backend::state::app_state::AppState;
use backend_test_support::unique_helpers::unique_str;

/// Create an account directly through the service layer.
pub async fn create_test_account(state: &AppState, password: &str) -> Account {
    let db = state.db().expect("test state should have a database");
    let first_name = unique_str("First");
    let last_name = unique_str("Last");

    create_account(db, &first_name, &last_name, password)
        .await
        .expect("account creation should succeed")
}
