use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize)]
pub struct TransferRequest {
    pub to_account: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// Transfer endpoint stub: accepts the request shape and echoes it back.
/// No funds move.
async fn create_transfer(req: web::Json<TransferRequest>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(req.into_inner()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/transfer").route(web::post().to(create_transfer)));
}
