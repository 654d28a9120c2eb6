use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Account id extracted from the `{id}` path segment.
///
/// Parse-only: existence is the handler's concern (and the guard's, on
/// protected routes).
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct AccountId(pub i64);

impl FromRequest for AccountId {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .match_info()
            .get("id")
            .ok_or_else(|| AppError::invalid(ErrorCode::InvalidAccountId, "Missing id parameter"))
            .and_then(|raw| {
                raw.parse::<i64>().map_err(|_| {
                    AppError::invalid(ErrorCode::InvalidAccountId, format!("Invalid id given {raw}"))
                })
            })
            .map(AccountId);

        std::future::ready(result)
    }
}
