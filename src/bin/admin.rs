//! CLI administration tool for snaplink.
//!
//! Works directly against the SQLite database, without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin admin -- links list
//!
//! # Look up where a code points
//! cargo run --bin admin -- links resolve aZ3xQ9
//!
//! # Shorten a URL
//! cargo run --bin admin -- links shorten https://example.com --base-url https://s.example.com/
//!
//! # Show link count
//! cargo run --bin admin -- stats
//!
//! # Check database connection and migrations
//! cargo run --bin admin -- db check
//! ```
//!
//! Reads the same environment variables as the server (`DATABASE_URL`,
//! `CODE_LENGTH`, `MAX_CODE_ATTEMPTS`, `BASE_URL`).

use snaplink::application::services::{ListingService, RedirectService, ShortenService};
use snaplink::config::{self, Config};
use snaplink::infrastructure::persistence::SqliteLinkRepository;
use snaplink::server::connect_sqlite;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing snaplink.
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
    /// Inspect and create links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links
    List,

    /// Print the original URL for a short code
    Resolve {
        /// Short code to look up
        code: String,
    },

    /// Shorten a URL
    Shorten {
        /// URL to shorten (http or https)
        url: String,

        /// Prefix for the printed short URL (defaults to BASE_URL)
        #[arg(short, long)]
        base_url: Option<String>,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and apply pending migrations
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = connect_sqlite(&config)
        .await
        .context("Failed to connect to database")?;
    let repo = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));

    match cli.command {
        Commands::Links { action } => handle_link_action(action, repo, &config).await?,
        Commands::Stats => handle_stats(repo).await?,
        Commands::Db { action } => match action {
            DbAction::Check => handle_db_check(repo, &config).await?,
        },
    }

    Ok(())
}

/// Dispatches link subcommands.
async fn handle_link_action(
    action: LinkAction,
    repo: Arc<SqliteLinkRepository>,
    config: &Config,
) -> Result<()> {
    match action {
        LinkAction::List => list_links(repo).await,
        LinkAction::Resolve { code } => resolve_link(repo, &code).await,
        LinkAction::Shorten { url, base_url } => {
            let prefix = base_url
                .or_else(|| config.base_url.clone())
                .unwrap_or_else(|| "http://localhost:3000/".to_string());
            shorten_link(repo, config, &url, &prefix).await
        }
    }
}

/// Lists all links in insertion order.
///
/// # Output Format
///
/// ```text
/// Links
///
///   ID    Code        Created            Original URL
///   ───────────────────────────────────────────────────────────────────
///   1     aZ3xQ9      2025-01-15 10:30   https://example.com/page
/// ```
async fn list_links(repo: Arc<SqliteLinkRepository>) -> Result<()> {
    println!("{}", "Links".bright_blue().bold());
    println!();

    let links = ListingService::new(repo)
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin -- links shorten <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {:<11} {:<18} {}",
        "ID".bright_white().bold(),
        "Code".bright_white().bold(),
        "Created".bright_white().bold(),
        "Original URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<5} {:<11} {:<18} {}",
            link.id.to_string().bright_black(),
            link.code.cyan(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.original_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Prints where a code redirects to.
async fn resolve_link(repo: Arc<SqliteLinkRepository>, code: &str) -> Result<()> {
    let target = RedirectService::new(repo)
        .resolve(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to resolve code: {}", e))?;

    match target {
        Some(url) => println!("{} → {}", code.cyan(), url),
        None => {
            println!("{}", format!("URL not found for '{code}'").red());
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Creates a link the same way `POST /shorten` does.
async fn shorten_link(
    repo: Arc<SqliteLinkRepository>,
    config: &Config,
    url: &str,
    prefix: &str,
) -> Result<()> {
    let shortened = ShortenService::new(repo, config.shorten_policy())
        .shorten(url, prefix)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("{}", "Link created".green().bold());
    println!();
    println!("  Code:      {}", shortened.link.code.cyan());
    println!("  Short URL: {}", shortened.short_url.bright_yellow().bold());
    println!("  Target:    {}", shortened.link.original_url);
    println!();

    Ok(())
}

/// Displays link count.
async fn handle_stats(repo: Arc<SqliteLinkRepository>) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let count = ListingService::new(repo)
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    println!("  Links: {}", count.to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Confirms the database is reachable and migrated.
async fn handle_db_check(repo: Arc<SqliteLinkRepository>, config: &Config) -> Result<()> {
    println!("{}", "Checking database connection...".bright_blue());

    let count = ListingService::new(repo)
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Database query failed: {}", e))?;

    println!("{}", "Database connection successful".green().bold());
    println!("  Database: {}", config.database_url.cyan());
    println!("  Links:    {}", count);

    Ok(())
}
