use clap::{Parser, ValueEnum};
use migration::{migrate, Database, MigrationCommand};

#[derive(Clone, ValueEnum)]
enum Command {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Account backend database migration tool")]
struct Args {
    /// Migration command to run
    #[arg(value_enum)]
    command: Command,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter("migration=info,sqlx=warn")
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();

    let url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("❌ DATABASE_URL must be set");
            std::process::exit(1);
        }
    };

    let db = match Database::connect(&url).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("❌ Failed to connect to the database: {e}");
            std::process::exit(1);
        }
    };

    let command = match args.command {
        Command::Up => MigrationCommand::Up,
        Command::Down => MigrationCommand::Down,
        Command::Fresh => MigrationCommand::Fresh,
        Command::Reset => MigrationCommand::Reset,
        Command::Refresh => MigrationCommand::Refresh,
        Command::Status => MigrationCommand::Status,
    };

    if let Err(e) = migrate(&db, command).await {
        eprintln!("❌ Migration failed: {e}");
        std::process::exit(2);
    }
}
