//! CLI administration tool for tinyurl.
//!
//! Works directly against a SQLite database, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- link create https://example.com
//!
//! # List all links
//! cargo run --bin admin -- link list
//!
//! # Look up where a slug points
//! cargo run --bin admin -- link resolve aB3xZ
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): SQLite connection string, e.g. `sqlite://tinyurl.db`
//! - `SLUG_LENGTH`, `SLUG_GENERATOR`, `SLUG_MAX_ATTEMPTS`: as for the server

use tinyurl::application::services::LinkService;
use tinyurl::config::{Config, StorageBackend};
use tinyurl::error::AppError;
use tinyurl::infrastructure::persistence::{SqliteLinkRepository, sqlite_link_repository};
use tinyurl::server::build_slug_generator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing tinyurl.
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
    /// Manage short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Shorten a URL
    Create {
        /// Target URL
        url: String,
    },

    /// List all links
    List,

    /// Show the target URL for a slug
    Resolve {
        /// Slug to look up
        slug: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config {
        storage: StorageBackend::Sqlite,
        database_url: std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
        ..Config::from_env()?
    };
    config.validate()?;

    let pool = sqlite_link_repository::connect(&config.database_url, 1)
        .await
        .context("Failed to connect to database")?;
    let repository = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));

    let service = LinkService::new(
        repository,
        build_slug_generator(&config),
        config.slug_max_attempts,
    );

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &service).await?,
        Commands::Db { action } => handle_db_action(action, &service).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, service: &LinkService) -> Result<()> {
    match action {
        LinkAction::Create { url } => create_link(service, &url).await,
        LinkAction::List => list_links(service).await,
        LinkAction::Resolve { slug } => resolve_slug(service, &slug).await,
    }
}

async fn create_link(service: &LinkService, url: &str) -> Result<()> {
    let link = service
        .create_link(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "Link created".green().bold());
    println!("  ID:   {}", link.id.to_string().bright_black());
    println!("  Slug: {}", link.slug.bright_yellow().bold());
    println!("  URL:  {}", link.url.cyan());

    Ok(())
}

/// Lists all links.
///
/// # Output Format
///
/// ```text
///   ID    Slug     URL
///   1     aB3xZ    https://example.com
/// ```
async fn list_links(service: &LinkService) -> Result<()> {
    let links = service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<8} {}",
        "ID".bright_white().bold(),
        "Slug".bright_white().bold(),
        "URL".bright_white().bold()
    );

    for link in &links {
        println!(
            "  {:<5} {:<8} {}",
            link.id.to_string().bright_black(),
            link.slug.bright_yellow(),
            link.url.cyan()
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());

    Ok(())
}

async fn resolve_slug(service: &LinkService, slug: &str) -> Result<()> {
    match service.resolve(slug).await {
        Ok(url) => {
            println!("{} → {}", slug.bright_yellow(), url.cyan());
            Ok(())
        }
        Err(AppError::NotFound { .. }) => {
            println!("{}", format!("  No link with slug '{}'", slug).yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to resolve slug: {}", e)),
    }
}

/// Dispatches database operation commands.
async fn handle_db_action(action: DbAction, service: &LinkService) -> Result<()> {
    match action {
        DbAction::Check => {
            service
                .storage_health()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;
            println!("{}", "Database connection OK".green().bold());
        }
    }

    Ok(())
}
