use std::time::SystemTime;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::jwt::mint_account_token;
use crate::db::require_db;
use crate::error::AppError;
use crate::services::accounts as account_service;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub account_number: i64,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Exchange account credentials for a bearer token bound to the account
/// number. Unknown numbers and wrong passwords are indistinguishable.
async fn login(
    req: web::Json<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let account = account_service::login(db, req.account_number, &req.password).await?;

    let token = mint_account_token(account.account_number, SystemTime::now(), &app_state.security)?;

    info!(account_id = account.id, "login succeeded");
    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/login").route(web::post().to(login)));
}
