//! CLI administration tool for alias-shortener.
//!
//! Manages aliases and checks the database directly, without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Store a URL under a generated alias
//! cargo run --bin admin -- url add https://example.com/a
//!
//! # Store a URL under a chosen alias
//! cargo run --bin admin -- url add https://example.com/a --alias x1
//!
//! # Resolve an alias
//! cargo run --bin admin -- url get x1
//!
//! # Delete an alias
//! cargo run --bin admin -- url delete x1
//!
//! # Check database connection / provision schema
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_HOST`, `DB_USER`, ...): PostgreSQL connection

use alias_shortener::config::Config;
use alias_shortener::domain::error::StorageError;
use alias_shortener::domain::repositories::{UrlDeleter, UrlSaver};
use alias_shortener::infrastructure::persistence::{PgUrlRepository, PoolSettings};
use alias_shortener::utils::alias::{AliasGenerator, DEFAULT_ALIAS_LENGTH, validate_alias};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;

/// CLI tool for managing alias-shortener.
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
    /// Manage aliases
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Alias management subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// Store a target URL under an alias
    Add {
        /// Target URL
        target: String,

        /// Alias to use (generated if omitted)
        #[arg(short, long)]
        alias: Option<String>,

        /// Length of the generated alias
        #[arg(short, long, default_value_t = DEFAULT_ALIAS_LENGTH)]
        length: usize,
    },

    /// Show the mapping stored under an alias
    Get {
        alias: String,
    },

    /// Delete an alias
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Create the url table and index if missing
    Migrate,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url().context("DATABASE_URL must be set")?;

    match cli.command {
        Commands::Url { action } => {
            let repo = PgUrlRepository::connect(&database_url, &PoolSettings::default())
                .await
                .context("Failed to connect to database")?;
            let result = handle_url_action(action, &repo).await;
            repo.close().await;
            result?;
        }
        Commands::Db { action } => {
            let pool = PgPool::connect(&database_url)
                .await
                .context("Failed to connect to database")?;
            handle_db_action(action, &pool).await?;
        }
    }

    Ok(())
}

/// Dispatches alias management commands.
async fn handle_url_action(action: UrlAction, repo: &PgUrlRepository) -> Result<()> {
    match action {
        UrlAction::Add {
            target,
            alias,
            length,
        } => add_url(repo, target, alias, length).await,
        UrlAction::Get { alias } => get_url(repo, &alias).await,
        UrlAction::Delete { alias, yes } => delete_url(repo, &alias, yes).await,
    }
}

/// Stores a mapping, generating the alias when none is given.
async fn add_url(
    repo: &PgUrlRepository,
    target: String,
    alias: Option<String>,
    length: usize,
) -> Result<()> {
    println!("{}", "🔗 Add URL".bright_blue().bold());
    println!();

    let alias = match alias {
        Some(alias) => {
            validate_alias(&alias).context("Invalid alias")?;
            alias
        }
        None => AliasGenerator::new(length).generate(),
    };

    match repo.save_url(&target, &alias).await {
        Ok(id) => {
            println!("{}", "✅ URL saved".green().bold());
            println!("  ID:     {}", id.to_string().bright_black());
            println!("  Alias:  {}", alias.bright_yellow().bold());
            println!("  Target: {}", target.cyan());
            println!();
            Ok(())
        }
        Err(StorageError::AliasExists(alias)) => {
            println!("{} {}", "❌ Alias already exists:".red(), alias.bright_yellow());
            Err(anyhow::anyhow!("Alias {} already exists", alias))
        }
        Err(e) => Err(anyhow::anyhow!("Failed to save url: {}", e)),
    }
}

/// Prints the mapping stored under `alias`.
async fn get_url(repo: &PgUrlRepository, alias: &str) -> Result<()> {
    match repo.find_mapping(alias).await {
        Ok(mapping) => {
            println!("  ID:     {}", mapping.id.to_string().bright_black());
            println!("  Alias:  {}", mapping.alias.bright_yellow());
            println!("  Target: {}", mapping.target.cyan());
            Ok(())
        }
        Err(StorageError::NotFound) => {
            println!("{} {}", "⚠️  No url stored under".yellow(), alias.bright_yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Database error: {}", e)),
    }
}

/// Deletes an alias after confirmation (default: No).
async fn delete_url(repo: &PgUrlRepository, alias: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete URL".bright_blue().bold());
    println!();

    let mapping = match repo.find_mapping(alias).await {
        Ok(mapping) => mapping,
        Err(StorageError::NotFound) => {
            println!("{} {}", "⚠️  No url stored under".yellow(), alias.bright_yellow());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Database error: {}", e)),
    };

    println!("  Alias:  {}", mapping.alias.bright_yellow());
    println!("  Target: {}", mapping.target.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this alias?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    match repo.delete_url(alias).await {
        Ok(()) => println!("{}", "✅ URL deleted".green().bold()),
        // Deleted concurrently between lookup and delete.
        Err(StorageError::NotFound) => println!("{}", "⚠️  Already deleted".yellow()),
        Err(e) => return Err(anyhow::anyhow!("Failed to delete url: {}", e)),
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Provisioning schema...".bright_blue());

            let repo = PgUrlRepository::new(std::sync::Arc::new(pool.clone()));
            repo.ensure_schema()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to provision schema: {}", e))?;

            println!("{}", "✅ Schema ready".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let urls: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url")
                .fetch_one(pool)
                .await
                .context("Failed to count stored urls")?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Stored urls: {}", urls.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[sqlx::test]
    async fn test_add_existing_alias_fails(pool: PgPool) {
        let repo = PgUrlRepository::new(Arc::new(pool));
        repo.save_url("https://example.com/a", "taken").await.unwrap();

        let result = add_url(
            &repo,
            "https://example.com/b".to_string(),
            Some("taken".to_string()),
            DEFAULT_ALIAS_LENGTH,
        )
        .await;

        assert!(result.is_err());
        assert_eq!(
            repo.find_mapping("taken").await.unwrap().target,
            "https://example.com/a"
        );
    }

    #[sqlx::test]
    async fn test_add_generates_alias(pool: PgPool) {
        let repo = PgUrlRepository::new(Arc::new(pool));

        let result = add_url(&repo, "https://example.com".to_string(), None, 8).await;

        assert!(result.is_ok());
    }

    #[sqlx::test(migrations = false)]
    async fn test_info_fails_without_schema(pool: PgPool) {
        let result = handle_db_action(DbAction::Info, &pool).await;

        assert!(result.is_err());
    }

    #[sqlx::test]
    async fn test_info_with_schema(pool: PgPool) {
        let result = handle_db_action(DbAction::Info, &pool).await;

        assert!(result.is_ok());
    }
}
