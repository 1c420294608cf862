//! CLI administration tool for link-redirector.
//!
//! Manages links and checks the database without going through the HTTP
//! surface. Every write goes through [`LinkService`], so the same validation
//! and duplicate-name rules apply as for the web page.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin admin -- links list
//!
//! # Add a link (prompts for missing values)
//! cargo run --bin admin -- links add --name docs --link https://docs.rs
//!
//! # Change a link
//! cargo run --bin admin -- links edit 3 --link https://docs.rs/axum
//!
//! # Delete a link
//! cargo run --bin admin -- links delete 3
//!
//! # Insert default links from a JSON file
//! cargo run --bin admin -- links seed seed_links.json
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (optional): SQLite connection string (default: `sqlite:urls.db`)

use link_redirector::application::services::LinkService;
use link_redirector::config::load_seed_links;
use link_redirector::infrastructure::persistence::{self, SqliteLinkRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::sync::Arc;

type Service = LinkService<SqliteLinkRepository>;

/// CLI tool for managing link-redirector.
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
    /// Manage links
    Links {
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
    /// List all links, newest first
    List,

    /// Add a link
    Add {
        /// Public name (e.g., "docs")
        #[arg(short, long)]
        name: Option<String>,

        /// Destination URL
        #[arg(short, long)]
        link: Option<String>,
    },

    /// Change the name and/or destination of a link
    Edit {
        /// Link ID
        id: i64,

        /// New name (keeps the current one if omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// New destination (keeps the current one if omitted)
        #[arg(short, long)]
        link: Option<String>,
    },

    /// Delete a link
    Delete {
        /// Link ID
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Insert links from a JSON file, skipping names that already exist
    Seed {
        /// Path to a JSON array of {"name", "link"} objects
        file: PathBuf,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:urls.db".to_string());

    let pool = persistence::connect(&database_url, 1)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, pool: &SqlitePool) -> Result<()> {
    let repo = Arc::new(SqliteLinkRepository::new(Arc::new(pool.clone())));
    let service = LinkService::new(repo);

    match action {
        LinkAction::List => list_links(&service).await?,
        LinkAction::Add { name, link } => add_link(&service, name, link).await?,
        LinkAction::Edit { id, name, link } => edit_link(&service, id, name, link).await?,
        LinkAction::Delete { id, yes } => delete_link(&service, id, yes).await?,
        LinkAction::Seed { file } => seed_links(&service, file).await?,
    }

    Ok(())
}

/// Lists all links.
///
/// # Output Format
///
/// ```text
/// 🔗 Links
///
///   ID  Name                 Destination
///   ───────────────────────────────────────────────────────────────
///   2   docs                 https://docs.rs
///   1   crates               https://crates.io
/// ```
async fn list_links(service: &Service) -> Result<()> {
    println!("{}", "🔗 Links".bright_blue().bold());
    println!();

    let links = service
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Add one with: {} admin links add",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<20} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Destination".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<4} {:<20} {}",
            link.id.to_string().bright_black(),
            link.name.cyan(),
            link.url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Adds a link, prompting for any value not given on the command line.
async fn add_link(service: &Service, name: Option<String>, link: Option<String>) -> Result<()> {
    println!("{}", "➕ Add Link".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let link = match link {
        Some(l) => l,
        None => Input::new()
            .with_prompt("Destination")
            .with_initial_text("https://")
            .interact_text()?,
    };

    let created = service
        .create(name, link)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e.message()))?;

    println!("{}", "✅ Link added!".green().bold());
    println!(
        "  {} /{} → {}",
        created.id.to_string().bright_black(),
        created.name.cyan(),
        created.url
    );
    println!();

    Ok(())
}

/// Updates a link; omitted values keep their current value.
async fn edit_link(
    service: &Service,
    id: i64,
    name: Option<String>,
    link: Option<String>,
) -> Result<()> {
    println!("{}", "✏️  Edit Link".bright_blue().bold());
    println!();

    let current = service
        .get(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e.message()))?;

    let updated = service
        .update(
            id,
            name.unwrap_or(current.name),
            link.unwrap_or(current.url),
        )
        .await
        .map_err(|e| anyhow::anyhow!("{}", e.message()))?;

    println!("{}", "✅ Link updated!".green().bold());
    println!("  /{} → {}", updated.name.cyan(), updated.url);
    println!();

    Ok(())
}

/// Deletes a link after confirmation (default: No).
async fn delete_link(service: &Service, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Link".bright_blue().bold());
    println!();

    let link = service
        .get(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e.message()))?;

    println!("  Name: {}", link.name.cyan());
    println!("  URL:  {}", link.url);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!("{}", "✅ Link deleted!".green().bold());
    println!();

    Ok(())
}

/// Inserts default links from a file.
async fn seed_links(service: &Service, file: PathBuf) -> Result<()> {
    println!("{}", "🌱 Seed Links".bright_blue().bold());
    println!();

    let defaults = load_seed_links(&file)?;
    let report = service
        .seed(&defaults)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to seed links: {}", e))?;

    println!(
        "  Inserted: {}",
        report.inserted.to_string().bright_green().bold()
    );
    println!(
        "  Existing: {}",
        report.existing.to_string().bright_black()
    );
    if report.invalid > 0 {
        println!("  Invalid:  {}", report.invalid.to_string().yellow().bold());
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(pool)
                .await?;

            println!("  SQLite: {}", version.bright_white());
            println!(
                "  Links:  {}",
                links_count.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
