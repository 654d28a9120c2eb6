use actix_web::web;

pub mod accounts;
pub mod health;
pub mod login;
pub mod transfer;

/// Configure application routes with the per-account scope left open.
///
/// In production, `main.rs` wires `configure_guarded` so that
/// `/account/{id}` sits behind the account guard. Tests that need to reach
/// the handlers directly register this variant instead.
pub fn configure(cfg: &mut web::ServiceConfig) {
    health::configure_routes(cfg);
    login::configure_routes(cfg);
    transfer::configure_routes(cfg);
    accounts::configure_routes(cfg);
}

/// Production wiring: same paths, with the account guard in place.
pub fn configure_guarded(cfg: &mut web::ServiceConfig) {
    health::configure_routes(cfg);
    login::configure_routes(cfg);
    transfer::configure_routes(cfg);
    accounts::configure_guarded_routes(cfg);
}
