use actix_web::{web, App, HttpServer};
use backend::config::db::DbProfile;
use backend::infra::db::DbKind;
use backend::infra::state::build_state;
use backend::middleware::cors::cors_middleware;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::structured_logger::StructuredLogger;
use backend::routes;
use backend::state::security_config::SecurityConfig;

mod seed;
mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Local dev convenience; the runtime environment normally provides vars.
    dotenvy::dotenv().ok();

    telemetry::init_tracing();

    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    let jwt = match std::env::var("JWT_SECRET") {
        Ok(jwt) => jwt,
        Err(_) => {
            eprintln!("❌ JWT_SECRET must be set");
            std::process::exit(1);
        }
    };
    let security_config = SecurityConfig::new(jwt.as_bytes());

    let app_state = match build_state()
        .with_profile(DbProfile::Prod)
        .with_db(DbKind::Postgres)
        .with_security(security_config)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    println!("✅ Database connected");

    if std::env::args().any(|arg| arg == "--seed") {
        println!("seeding the database");
        if let Err(e) = seed::seed_accounts(&app_state).await {
            eprintln!("❌ Failed to seed accounts: {e}");
            std::process::exit(1);
        }
    }

    println!("🚀 Starting account API on http://{}:{}", host, port);

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure_guarded)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
