//! Stockroom CLI - Inventory and shopping-cart management.
//!
//! # Usage
//!
//! ```bash
//! # Add an item (price in cents, stock flag is "true" or anything else)
//! stockroom add "Apple" 100 true fruit
//!
//! # Inspect the inventory
//! stockroom list
//! stockroom view <id>
//! stockroom filter priceLessThan 500
//!
//! # Work with the cart
//! stockroom addToCart <id> 2
//! stockroom viewCart
//! stockroom cancelCart
//! ```
//!
//! # Commands
//!
//! - `add`, `list`, `view`, `update`, `remove` - Manage inventory items
//! - `addToCart`, `viewCart`, `cancelCart` - Manage the cart
//! - `filter` - Query the inventory by `inStock`, `priceGreaterThan` or `priceLessThan`
//!
//! Documents are read from and written to `STOCKROOM_DATA_DIR` (default: the
//! current directory), or the directory given with `--data-dir`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stockroom_store::{JsonFileStore, StoreConfig};

mod commands;
mod render;

use commands::CommandError;

#[derive(Parser)]
#[command(name = "stockroom")]
#[command(author, version, about = "Stockroom inventory and cart manager")]
struct Cli {
    /// Directory holding the inventory and cart documents
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new inventory item
    Add {
        name: String,
        /// Price in cents
        #[arg(allow_hyphen_values = true)]
        price_in_cents: String,
        /// `true` if the item is in stock
        in_stock: String,
        category: String,
    },
    /// List every inventory item
    List,
    /// Show a single inventory item
    View { id: String },
    /// Replace the fields of an inventory item
    Update {
        id: String,
        name: String,
        /// Price in cents
        #[arg(allow_hyphen_values = true)]
        price_in_cents: String,
        /// `true` if the item is in stock
        in_stock: String,
        category: String,
    },
    /// Remove an inventory item
    Remove { id: String },
    /// Add an inventory item to the cart
    #[command(name = "addToCart", alias = "add-to-cart")]
    AddToCart {
        /// Inventory item ID
        id: String,
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },
    /// Show the cart with totals
    #[command(name = "viewCart", alias = "view-cart")]
    ViewCart,
    /// Empty the cart
    #[command(name = "cancelCart", alias = "cancel-cart")]
    CancelCart,
    /// List inventory items matching a property
    Filter {
        /// `inStock`, `priceGreaterThan` or `priceLessThan`
        property: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

fn main() {
    // Load .env before the subscriber so RUST_LOG can come from it
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout only carries command output
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "stockroom_store=info,stockroom_cli=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CommandError> {
    let mut config = StoreConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config = config.with_data_dir(data_dir);
    }
    tracing::debug!(data_dir = %config.data_dir().display(), "Using data directory");

    let mut store = JsonFileStore::new(config);

    let output = match cli.command {
        Commands::Add {
            name,
            price_in_cents,
            in_stock,
            category,
        } => commands::inventory::add(&mut store, &name, &price_in_cents, &in_stock, &category)?,
        Commands::List => commands::inventory::list(&store),
        Commands::View { id } => commands::inventory::view(&store, &id),
        Commands::Update {
            id,
            name,
            price_in_cents,
            in_stock,
            category,
        } => commands::inventory::update(
            &mut store,
            &id,
            &name,
            &price_in_cents,
            &in_stock,
            &category,
        )?,
        Commands::Remove { id } => commands::inventory::remove(&mut store, &id)?,
        Commands::AddToCart { id, quantity } => {
            commands::cart::add_to_cart(&mut store, &id, &quantity)?
        }
        Commands::ViewCart => commands::cart::view_cart(&store),
        Commands::CancelCart => commands::cart::cancel_cart(&mut store)?,
        Commands::Filter { property, value } => {
            commands::inventory::filter(&store, &property, &value)
        }
    };

    render::print(&output);
    Ok(())
}
