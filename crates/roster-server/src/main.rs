//! # Roster Server
//!
//! Main binary: loads configuration, checks the signing secret, migrates the
//! database and serves the REST API. Also seeds credentials via `add-login`.

use clap::{Parser, Subcommand};
use roster_api::{build_router, AppState};
use roster_common::{
    config::{self, AppConfig},
    models::login::LoginRequest,
    validation::validate_request,
};
use roster_db::{repository::logins, Database};
use std::net::SocketAddr;

#[derive(Debug, Parser)]
#[command(name = "roster", version, about = "Token-guarded user management API")]
struct Cli {
    /// Config file name, extension optional (roster.toml, roster.yaml, ...)
    #[arg(long, short, env = "ROSTER_CONFIG", default_value = config::DEFAULT_CONFIG_FILE)]
    config: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Insert a username/password pair into the logins table
    AddLogin {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing (structured logging)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster=debug,tower_http=debug".into()),
        )
        .with_target(true)
        .init();

    let config = config::load(&cli.config)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::AddLogin { username, password } => add_login(config, username, password).await,
    }
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Roster v{}", env!("CARGO_PKG_VERSION"));

    let db = Database::connect(&config.database).await?;
    db.migrate().await?;

    // A bad secret ends the process here, before anything is bound
    let state = AppState::new(db, &config.auth)?;
    tracing::warn!("Login credentials are stored and compared in plaintext");

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("REST API listening on http://{addr}");

    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

async fn add_login(config: AppConfig, username: String, password: String) -> anyhow::Result<()> {
    let request = LoginRequest {
        username: Some(username),
        password: Some(password),
    };
    validate_request(&request)?;
    let (username, password) = request.credentials();

    let db = Database::connect(&config.database).await?;
    db.migrate().await?;

    let login = logins::create_login(&db.pool, username, password).await?;
    tracing::info!(id = login.id, username = %login.username, "Login added");
    Ok(())
}
