//! Shopfront CLI - Terminal storefront.
//!
//! # Usage
//!
//! ```bash
//! # Interactive shop: browse, filter, page and manage the cart
//! shopfront browse
//!
//! # Print one page of the listing
//! shopfront products --category beauty --page-size 5 --page 2
//!
//! # One-shot cart operations
//! shopfront cart add 12
//! shopfront cart show
//! shopfront cart checkout
//!
//! # Keep the cart in memory only
//! shopfront --ephemeral browse
//! ```
//!
//! # Commands
//!
//! - `browse` - Interactive shell
//! - `products` - Print a page of products
//! - `cart` - Show or change the saved cart

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shopfront_core::ProductId;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod render;
mod shell;

use commands::{CliError, Context};

#[derive(Parser)]
#[command(name = "shopfront")]
#[command(author, version, about = "Shopfront terminal storefront")]
struct Cli {
    /// Keep the cart in memory instead of the data directory
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Directory holding the saved cart (overrides `SHOPFRONT_DATA_DIR`)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog and manage the cart interactively
    Browse,
    /// Print one page of products
    Products {
        /// Category to show (`all` for every category)
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Products per page (5, 10, 20 or 50)
        #[arg(short = 's', long)]
        page_size: Option<u32>,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Show or change the saved cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart lines and totals
    Show,
    /// Add one unit of a product
    Add {
        /// Product ID
        id: ProductId,
    },
    /// Remove a product's line
    Remove {
        /// Product ID
        id: ProductId,
    },
    /// Empty the cart
    Clear,
    /// Confirm the order and empty the cart
    Checkout,
}

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "shopfront_cli=info,shopfront_storefront=info";

/// Install the tracing subscriber. Logs go to stderr so they never mix with
/// rendered output.
fn init_tracing(json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "Command failed");
        let _ = writeln!(std::io::stderr(), "{}", e.user_message());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut ctx = Context::open(cli.ephemeral, cli.data_dir)?;
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Browse => commands::browse::run(&mut ctx, &mut out).await?,
        Commands::Products {
            category,
            page_size,
            page,
        } => commands::products::run(&mut ctx, &mut out, &category, page_size, page).await?,
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&ctx, &mut out)?,
            CartAction::Add { id } => commands::cart::add(&mut ctx, &mut out, id).await?,
            CartAction::Remove { id } => commands::cart::remove(&mut ctx, &mut out, id)?,
            CartAction::Clear => commands::cart::clear(&mut ctx, &mut out)?,
            CartAction::Checkout => commands::cart::checkout(&mut ctx, &mut out)?,
        },
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_filter_shows_info_from_both_crates() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
        for directive in ["shopfront_cli=info", "shopfront_storefront=info"] {
            assert!(DEFAULT_LOG_FILTER.split(',').any(|d| d == directive));
        }
    }

    #[test]
    fn test_products_page_flag_parses_large_values() {
        let cli = Cli::try_parse_from(["shopfront", "products", "--page", "4000000000"]).unwrap();
        assert!(matches!(cli.command, Commands::Products { page: 4_000_000_000, .. }));
    }
}
