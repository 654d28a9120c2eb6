// Store contract tests for the accounts repository, run against an
// in-memory database migrated by the production bootstrap.

mod support;

use backend::repos::accounts::{self, NewAccount};
use backend::state::security_config::SecurityConfig;
use rust_decimal::Decimal;

fn new_account(number: i64) -> NewAccount {
    NewAccount {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        account_number: number,
        encrypted_password: "$argon2id$stub-hash".to_string(),
    }
}

#[actix_web::test]
async fn test_create_then_get_by_id_returns_equal_record() {
    let state = support::sqlite_state(SecurityConfig::default()).await;
    let db = state.db().unwrap();

    let created = accounts::create(db, new_account(90_000_001)).await.unwrap();
    assert!(created.id > 0);

    let fetched = accounts::find_by_id(db, created.id)
        .await
        .unwrap()
        .expect("created account should be readable");

    // Equal on all caller-supplied fields; the store assigned only the id.
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.first_name, "Ada");
    assert_eq!(fetched.last_name, "Lovelace");
    assert_eq!(fetched.account_number, 90_000_001);
    assert_eq!(fetched.encrypted_password, "$argon2id$stub-hash");
    assert_eq!(fetched.balance, Decimal::ZERO);
}

#[actix_web::test]
async fn test_find_by_number_returns_the_created_row() {
    let state = support::sqlite_state(SecurityConfig::default()).await;
    let db = state.db().unwrap();

    let created = accounts::create(db, new_account(90_000_002)).await.unwrap();

    let fetched = accounts::find_by_number(db, 90_000_002)
        .await
        .unwrap()
        .expect("account should be found by number");
    assert_eq!(fetched.id, created.id);

    assert!(accounts::find_by_number(db, 1).await.unwrap().is_none());
}

#[actix_web::test]
async fn test_get_missing_id_returns_none() {
    let state = support::sqlite_state(SecurityConfig::default()).await;
    let db = state.db().unwrap();

    assert!(accounts::find_by_id(db, 424_242).await.unwrap().is_none());
}

#[actix_web::test]
async fn test_delete_then_get_returns_none() {
    let state = support::sqlite_state(SecurityConfig::default()).await;
    let db = state.db().unwrap();

    let created = accounts::create(db, new_account(90_000_003)).await.unwrap();

    accounts::delete_by_id(db, created.id).await.unwrap();

    // Never the stale record.
    assert!(accounts::find_by_id(db, created.id)
        .await
        .unwrap()
        .is_none());
}

#[actix_web::test]
async fn test_delete_of_missing_id_succeeds() {
    let state = support::sqlite_state(SecurityConfig::default()).await;
    let db = state.db().unwrap();

    // Idempotent delete: a missing id is not an error.
    accounts::delete_by_id(db, 424_242).await.unwrap();
}

#[actix_web::test]
async fn test_list_returns_all_records() {
    let state = support::sqlite_state(SecurityConfig::default()).await;
    let db = state.db().unwrap();

    for number in [90_000_004, 90_000_005, 90_000_006] {
        accounts::create(db, new_account(number)).await.unwrap();
    }

    let all = accounts::list(db).await.unwrap();
    assert_eq!(all.len(), 3);

    let numbers: Vec<i64> = all.iter().map(|a| a.account_number).collect();
    for number in [90_000_004, 90_000_005, 90_000_006] {
        assert!(numbers.contains(&number));
    }
}
