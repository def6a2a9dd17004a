//! CLI administration tool for shorty.
//!
//! Issues registration tokens and inspects the database without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Issue a new token for the registration gate
//! cargo run --bin admin -- token create
//!
//! # List all tokens
//! cargo run --bin admin -- token list
//!
//! # Check database connection and row counts
//! cargo run --bin admin -- db check
//!
//! # Apply schema migrations
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! Reads the same configuration as the server (`DATABASE_URL`, pool settings).
//! Pending migrations are applied on connect, as the server does.

use shorty::application::services::AuthService;
use shorty::config::{self, Config};
use shorty::domain::repositories::{MappingRepository, TokenRepository};
use shorty::infrastructure::persistence::{
    self, MIGRATOR, PoolSettings, SqliteMappingRepository, SqliteTokenRepository,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing shorty.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage registration tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Token management subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Generate and store a new token
    Create {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all tokens
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and show row counts
    Check,

    /// Apply pending schema migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = connect(&config).await?;

    match cli.command {
        Commands::Token { action } => handle_token_action(action, pool).await?,
        Commands::Db { action } => handle_db_action(action, pool).await?,
    }

    Ok(())
}

async fn connect(config: &Config) -> Result<Arc<SqlitePool>> {
    let pool = persistence::connect_and_migrate(&config.database_url, PoolSettings::from(config))
        .await
        .context("Failed to open database")?;

    Ok(Arc::new(pool))
}

/// Dispatches token management commands.
async fn handle_token_action(action: TokenAction, pool: Arc<SqlitePool>) -> Result<()> {
    let repo = Arc::new(SqliteTokenRepository::new(pool));

    match action {
        TokenAction::Create { yes } => create_token(repo, yes).await,
        TokenAction::List => list_tokens(repo).await,
    }
}

/// Issues a new token.
///
/// The raw value is printed once. It is stored verbatim, so it can be listed
/// again later with `token list`.
async fn create_token(repo: Arc<SqliteTokenRepository>, skip_confirm: bool) -> Result<()> {
    println!("{}", "Create registration token".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Generate and store a new token?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let token = AuthService::new(repo)
        .issue_token()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create token: {}", e))?;

    println!();
    println!("{}", "Token created successfully!".green().bold());
    println!("  ID:    {}", token.id.to_string().bright_black());
    println!("  Token: {}", token.token.bright_yellow().bold());
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -H \"{}: {}\" -H 'Content-Type: application/json' -H 'Accept: application/json' \\",
        "Authorization".bright_cyan(),
        token.token.bright_yellow()
    );
    println!("       -d '{{\"long_url\": \"example.com\"}}' http://localhost:7777/new-url");
    println!();

    Ok(())
}

/// Lists all tokens, newest first.
async fn list_tokens(repo: Arc<SqliteTokenRepository>) -> Result<()> {
    println!("{}", "Registration tokens".bright_blue().bold());
    println!();

    let tokens = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list tokens: {}", e))?;

    if tokens.is_empty() {
        println!("{}", "  No tokens found".yellow());
        println!();
        println!(
            "  Create one with: {} admin token create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {}",
        "ID".bright_white().bold(),
        "Token".bright_white().bold()
    );
    println!("  {}", "-".repeat(50).bright_black());

    for token in &tokens {
        println!(
            "  {:<5} {}",
            token.id.to_string().bright_black(),
            token.token.cyan()
        );
    }

    println!();
    println!(
        "  Total: {}",
        tokens.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: Arc<SqlitePool>) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            let mappings = SqliteMappingRepository::new(pool.clone());
            mappings
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            let mapping_count = mappings
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count mappings: {}", e))?;
            let token_count = SqliteTokenRepository::new(pool)
                .list()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list tokens: {}", e))?
                .len();

            println!("{}", "Database connection OK".green().bold());
            println!(
                "  Mappings: {}",
                mapping_count.to_string().bright_green().bold()
            );
            println!(
                "  Tokens:   {}",
                token_count.to_string().bright_green().bold()
            );
        }
        DbAction::Migrate => {
            println!("{}", "Applying migrations...".bright_blue());

            MIGRATOR
                .run(pool.as_ref())
                .await
                .context("Failed to run migrations")?;

            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}
