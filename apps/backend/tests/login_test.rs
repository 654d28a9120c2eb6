// Integration tests for the login endpoint: the only way clients obtain
// tokens, with indistinguishable failures.

mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use backend::auth::jwt::verify_account_token;
use backend::state::security_config::SecurityConfig;
use backend_test_support::error_body::assert_error_body;
use serde_json::json;

use crate::support::app_builder::create_test_app;
use crate::support::factory::create_test_account;

fn test_security() -> SecurityConfig {
    SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes())
}

#[actix_web::test]
async fn test_login_returns_token_bound_to_the_account() {
    let security = test_security();
    let state = support::sqlite_state(security.clone()).await;
    let account = create_test_account(&state, "pass23456").await;
    let app = create_test_app(state).with_prod_routes().build().await.unwrap();

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({
            "account_number": account.account_number,
            "password": "pass23456"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().unwrap();
    assert!(!token.is_empty());

    let claims = verify_account_token(token, &security).expect("token should verify");
    assert_eq!(claims.account_number, account.account_number);
}

#[actix_web::test]
async fn test_login_wrong_password_is_rejected() {
    let security = test_security();
    let state = support::sqlite_state(security.clone()).await;
    let account = create_test_account(&state, "pass23456").await;
    let app = create_test_app(state).with_prod_routes().build().await.unwrap();

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({
            "account_number": account.account_number,
            "password": "wrong"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    assert_error_body(status, &body, StatusCode::FORBIDDEN, "invalid credentials");
}

#[actix_web::test]
async fn test_login_unknown_number_is_indistinguishable() {
    let security = test_security();
    let state = support::sqlite_state(security.clone()).await;
    let account = create_test_account(&state, "pass23456").await;
    let app = create_test_app(state).with_prod_routes().build().await.unwrap();

    // Same status, same body as the wrong-password case.
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({
            "account_number": account.account_number + 1,
            "password": "pass23456"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    assert_error_body(status, &body, StatusCode::FORBIDDEN, "invalid credentials");
}
