//! CLI administration tool for link-shortener.
//!
//! Manages short links directly against the database, without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- link create https://example.com/path
//!
//! # Show a link with its access count
//! cargo run --bin admin -- link show <code>
//!
//! # Delete a link (asks for confirmation unless -y)
//! cargo run --bin admin -- link delete <code>
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (see `link_shortener::config`).

use link_shortener::application::services::LinkService;
use link_shortener::config::{self, Config};
use link_shortener::infrastructure::persistence::PgShortenRepository;
use link_shortener::server::connect_pool;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// CLI tool for managing link-shortener.
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
        /// URL to shorten
        url: String,
    },

    /// Show a link with its access count
    Show {
        /// Short code
        code: String,
    },

    /// Delete a link
    Delete {
        /// Short code
        code: String,

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
}

type Service = LinkService<PgShortenRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let service = build_service(&config).await?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &service).await?,
        Commands::Db { action } => handle_db_action(action, &service).await?,
    }

    Ok(())
}

async fn build_service(config: &Config) -> Result<Service> {
    let pool = connect_pool(config).await?;
    let repository =
        PgShortenRepository::with_statement_timeout(Arc::new(pool), config.statement_timeout());
    Ok(LinkService::new(Arc::new(repository)))
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, service: &Service) -> Result<()> {
    match action {
        LinkAction::Create { url } => {
            let link = service.create_short_link(url).await?;
            println!("{}", "✔ Short link created".green().bold());
            println!("  {} {}", "Code:".bold(), link.short_code.bright_cyan());
            println!("  {} {}", "URL: ".bold(), link.url);
        }
        LinkAction::Show { code } => {
            let link = service.get_statistics(&code).await?;
            println!("{}", "🔗 Short link".bright_blue().bold());
            println!("  {} {}", "ID:      ".bold(), link.id);
            println!("  {} {}", "Code:    ".bold(), link.short_code.bright_cyan());
            println!("  {} {}", "URL:     ".bold(), link.url);
            println!("  {} {}", "Accesses:".bold(), link.access_count);
            println!("  {} {}", "Created: ".bold(), link.created_at);
            if link.was_updated() {
                println!("  {} {}", "Updated: ".bold(), link.updated_at);
            } else {
                println!("  {} {}", "Updated: ".bold(), "never".dimmed());
            }
        }
        LinkAction::Delete { code, yes } => {
            let link = service.get_link(&code).await?;

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Delete {} → {}?", link.short_code, link.url))
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "Cancelled".yellow());
                    return Ok(());
                }
            }

            service.delete_link(&code).await?;
            println!("{}", "✔ Short link deleted".green().bold());
        }
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, service: &Service) -> Result<()> {
    match action {
        DbAction::Check => match service.health_check().await {
            Ok(()) => println!("{}", "✔ Database connection OK".green().bold()),
            Err(e) => {
                println!("{} {}", "✘ Database check failed:".red().bold(), e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
