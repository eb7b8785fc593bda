//! CLI administration tool for slug-shortener.
//!
//! Works directly against the stores, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Generate a value for API_TOKEN
//! cargo run --bin admin -- token generate
//!
//! # Inspect a slug and its analytics rows
//! cargo run --bin admin -- slug get promo
//!
//! # Create or update a premium slug
//! cargo run --bin admin -- slug set promo https://example.com/sale
//! cargo run --bin admin -- slug set promo https://example.com/new --update -y
//!
//! # Check both stores / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `REDIS_URL` (or `REDIS_HOST`, ...): Mapping Store, required by `slug`
//! - `DATABASE_URL` (or `DB_HOST`, ...): Analytics Store, required by `db`
//!   and used by `slug` when set
//! - `MAPPING_KEY_PREFIX`: Redis key namespace (default: empty)

use slug_shortener::api::dto::premium::PremiumSlugRequest;
use slug_shortener::application::services::SlugService;
use slug_shortener::config::{Config, mask_connection_string};
use slug_shortener::domain::analytics_queue::AnalyticsQueue;
use slug_shortener::domain::analytics_worker::run_analytics_worker;
use slug_shortener::domain::entities::PremiumMode;
use slug_shortener::domain::repositories::{AnalyticsRepository, MappingStore};
use slug_shortener::infrastructure::kv::RedisMappingStore;
use slug_shortener::infrastructure::persistence::{
    MemoryAnalyticsRepository, PgAnalyticsRepository,
};

use anyhow::{Context, Result};
use base64::Engine as _;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// Number of random bytes behind a generated API token.
const TOKEN_BYTES: usize = 32;

/// CLI tool for managing slug-shortener.
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
    /// API token helpers
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Inspect and write slugs
    Slug {
        #[command(subcommand)]
        action: SlugAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum TokenAction {
    /// Print a random URL-safe secret for API_TOKEN
    Generate,
}

#[derive(Subcommand)]
enum SlugAction {
    /// Resolve a slug and list its analytics rows
    Get { slug: String },

    /// Create a premium slug, or overwrite it with --update
    Set {
        slug: String,
        url: String,

        /// Overwrite an existing slug
        #[arg(short, long)]
        update: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check connectivity of both stores
    Check,

    /// Apply pending migrations to the Analytics Store
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Token {
            action: TokenAction::Generate,
        } => generate_token_command()?,
        Commands::Slug { action } => handle_slug_action(action).await?,
        Commands::Db { action } => handle_db_action(action).await?,
    }

    Ok(())
}

fn generate_token_command() -> Result<()> {
    let token = generate_token()?;

    println!("{}", "🔑 New API token".bright_blue().bold());
    println!();
    println!("  {}", token.bright_yellow().bold());
    println!();
    println!("{}", "Add it to your environment:".bright_white());
    println!("  {}={}", "API_TOKEN".bright_cyan(), token);
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -X POST -H \"Authorization: Bearer {}\" -H \"Content-Type: application/json\" \\",
        token.bright_yellow()
    );
    println!("       -d '{{\"originalUrl\":\"https://example.com\"}}' http://localhost:3000/api");
    println!();

    Ok(())
}

async fn handle_slug_action(action: SlugAction) -> Result<()> {
    let mapping_store = connect_mapping_store().await?;
    let pool = connect_pool_if_configured().await?;

    match action {
        SlugAction::Get { slug } => get_slug(mapping_store, pool, &slug).await,
        SlugAction::Set {
            slug,
            url,
            update,
            yes,
        } => set_slug(mapping_store, pool, slug, url, update, yes).await,
    }
}

/// Shows where a slug points and the analytics rows recorded for it.
async fn get_slug(
    mapping_store: Arc<dyn MappingStore>,
    pool: Option<PgPool>,
    slug: &str,
) -> Result<()> {
    println!("{}", format!("🔎 Slug '{slug}'").bright_blue().bold());
    println!();

    let original_url = mapping_store
        .get(slug)
        .await
        .map_err(|e| anyhow::anyhow!("Mapping store error: {:?}", e))?;

    match original_url {
        Some(url) => println!("  Target: {}", url.cyan()),
        None => {
            println!("{}", "  Not found".yellow());
            return Ok(());
        }
    }

    let Some(pool) = pool else {
        println!("  Analytics: {}", "DATABASE_URL not set".bright_black());
        return Ok(());
    };

    let rows = PgAnalyticsRepository::new(Arc::new(pool))
        .find_by_slug(slug)
        .await
        .map_err(|e| anyhow::anyhow!("Analytics store error: {:?}", e))?;

    println!();
    if rows.is_empty() {
        println!("{}", "  No analytics rows".yellow());
        return Ok(());
    }

    println!(
        "  {:<60} {:>8}",
        "Recorded URL".bright_white().bold(),
        "Clicks".bright_white().bold()
    );
    println!("  {}", "─".repeat(69).bright_black());
    for row in &rows {
        println!(
            "  {:<60} {:>8}",
            row.real.cyan(),
            row.clicks.to_string().bright_green()
        );
    }
    println!();

    Ok(())
}

/// Writes a premium slug through the same service as `POST /pro` / `PUT /pro`.
async fn set_slug(
    mapping_store: Arc<dyn MappingStore>,
    pool: Option<PgPool>,
    slug: String,
    url: String,
    update: bool,
    skip_confirm: bool,
) -> Result<()> {
    let mode = if update {
        PremiumMode::Update
    } else {
        PremiumMode::Create
    };

    let mapping = PremiumSlugRequest {
        original_url: Some(url),
        short_url: Some(slug),
    }
    .validate()
    .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  Slug:   {}", mapping.slug.cyan());
    println!("  Target: {}", mapping.original_url.cyan());
    println!();

    if mode.is_update() && !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Overwrite this slug if it exists?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let analytics_repository: Arc<dyn AnalyticsRepository> = match pool {
        Some(pool) => Arc::new(PgAnalyticsRepository::new(Arc::new(pool))),
        None => {
            println!(
                "{}",
                "⚠️  DATABASE_URL not set, no analytics row will be recorded".yellow()
            );
            Arc::new(MemoryAnalyticsRepository::new())
        }
    };

    let (analytics, rx) = AnalyticsQueue::channel(16);
    let worker = tokio::spawn(run_analytics_worker(rx, analytics_repository, 1));

    let service = SlugService::new(mapping_store, analytics);
    let result = service.write_premium_slug(&mapping, mode).await;

    // Closing the queue lets the worker finish the pending analytics insert.
    drop(service);
    worker.await.context("Analytics worker panicked")?;

    match result {
        Ok(()) => {
            println!("{}", format!("✅ {}", mode.success_message()).green().bold());
            Ok(())
        }
        Err(e) => {
            println!("{}", format!("❌ {}", mode.failure_message()).red().bold());
            anyhow::bail!("{}", e)
        }
    }
}

async fn handle_db_action(action: DbAction) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking stores...".bright_blue());

            let pool = connect_pool_if_configured()
                .await?
                .context("DATABASE_URL must be set")?;
            sqlx::query("SELECT 1").fetch_one(&pool).await?;
            println!("{}", "✅ Analytics store (PostgreSQL) OK".green().bold());

            match Config::load_redis_url()? {
                Some(_) => {
                    let store = connect_mapping_store().await?;
                    if store.health_check().await {
                        println!("{}", "✅ Mapping store (Redis) OK".green().bold());
                    } else {
                        anyhow::bail!("Mapping store did not answer PING");
                    }
                }
                None => println!("{}", "⚠️  REDIS_URL not set, skipped".yellow()),
            }
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            let pool = connect_pool_if_configured()
                .await?
                .context("DATABASE_URL must be set")?;
            sqlx::migrate!("./migrations").run(&pool).await?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}

async fn connect_mapping_store() -> Result<Arc<dyn MappingStore>> {
    let redis_url = Config::load_redis_url()?.context("REDIS_URL must be set")?;
    let key_prefix = std::env::var("MAPPING_KEY_PREFIX").unwrap_or_default();

    let store = RedisMappingStore::connect(&redis_url, key_prefix)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to Redis at {}",
                mask_connection_string(&redis_url)
            )
        })?;

    Ok(Arc::new(store))
}

async fn connect_pool_if_configured() -> Result<Option<PgPool>> {
    let Some(database_url) = Config::load_database_url()? else {
        return Ok(None);
    };

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    Ok(Some(pool))
}

/// Generates a random API token.
///
/// # Format
///
/// - 32 random bytes from the OS
/// - URL-safe base64 without padding (43 characters)
fn generate_token() -> Result<String> {
    let mut buffer = [0u8; TOKEN_BYTES];
    getrandom::fill(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to generate random bytes: {}", e))?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}
