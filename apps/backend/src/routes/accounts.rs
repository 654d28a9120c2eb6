use std::time::SystemTime;

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::auth::jwt::mint_account_token;
use crate::db::require_db;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::account_id::AccountId;
use crate::middleware::account_guard::AccountGuard;
use crate::repos::accounts::Account;
use crate::services::accounts as account_service;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub password: String,
}

/// Public view of an account. The credential hash is structurally absent.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub account_number: i64,
    pub balance: Decimal,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            first_name: account.first_name,
            last_name: account.last_name,
            account_number: account.account_number,
            balance: account.balance,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: i64,
}

/// List all accounts. Unauthenticated, as is the collection POST.
async fn list_accounts(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let accounts = account_service::list_accounts(db).await?;

    let body: Vec<AccountResponse> = accounts.into_iter().map(AccountResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn create_account(
    req: web::Json<CreateAccountRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if req.first_name.trim().is_empty() {
        return Err(AppError::invalid(
            ErrorCode::InvalidName,
            "First name cannot be empty",
        ));
    }
    if req.last_name.trim().is_empty() {
        return Err(AppError::invalid(
            ErrorCode::InvalidName,
            "Last name cannot be empty",
        ));
    }
    if req.password.is_empty() {
        return Err(AppError::invalid(
            ErrorCode::InvalidPassword,
            "Password cannot be empty",
        ));
    }

    let db = require_db(&app_state)?;
    let account =
        account_service::create_account(db, &req.first_name, &req.last_name, &req.password).await?;

    // A first token for the fresh account goes to the debug log only, never
    // into the response body. Clients obtain tokens via /login.
    match mint_account_token(account.account_number, SystemTime::now(), &app_state.security) {
        Ok(token) => debug!(account_id = account.id, token, "initial token for new account"),
        Err(e) => debug!(account_id = account.id, error = %e, "could not mint initial token"),
    }

    Ok(HttpResponse::Ok().json(AccountResponse::from(account)))
}

async fn get_account(
    id: AccountId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let account = account_service::get_account(db, id.0).await?;

    Ok(HttpResponse::Ok().json(AccountResponse::from(account)))
}

async fn delete_account(
    id: AccountId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    account_service::delete_account(db, id.0).await?;

    Ok(HttpResponse::Ok().json(DeleteResponse { deleted: id.0 }))
}

fn item_resource() -> actix_web::Resource {
    web::resource("")
        .route(web::get().to(get_account))
        .route(web::delete().to(delete_account))
}

/// Account routes with the per-account scope left open. Test wiring.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/account")
            .route(web::get().to(list_accounts))
            .route(web::post().to(create_account)),
    );
    cfg.service(web::scope("/account/{id}").service(item_resource()));
}

/// Production wiring: same paths, `/account/{id}` behind the account guard.
pub fn configure_guarded_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/account")
            .route(web::get().to(list_accounts))
            .route(web::post().to(create_account)),
    );
    cfg.service(
        web::scope("/account/{id}")
            .wrap(AccountGuard)
            .service(item_resource()),
    );
}
