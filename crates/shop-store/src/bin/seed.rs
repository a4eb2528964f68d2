//! # Seed Data Generator
//!
//! Fills a fresh store with demo items and carts, then prints what it built.
//! Handy for eyeballing the repository behaviour and the debug logs.
//!
//! ## Usage
//! ```bash
//! # 40 items, 10 carts (default)
//! cargo run -p shop-store --bin seed
//!
//! # Custom amounts
//! cargo run -p shop-store --bin seed -- --items 200 --carts 50
//!
//! # Dump the resulting carts as JSON
//! cargo run -p shop-store --bin seed -- --json
//!
//! # Watch every mutation
//! RUST_LOG=shop=debug cargo run -p shop-store --bin seed
//! ```
//!
//! ## What Gets Generated
//! - Items: `{product} {size}` with prices from 0.99 upward
//! - Every seventh item is soft-deleted after creation
//! - Each cart gets a handful of adds, some of them repeated so lines
//!   accumulate quantity

use std::env;

use serde::Serialize;
use tracing_subscriber::EnvFilter;

use shop_core::{Cart, CartFilter, ItemFilter, ItemId, Money, Page};
use shop_store::{Store, StoreConfig};

/// Product names for demo data
const PRODUCTS: &[&str] = &[
    "Pen",
    "Pencil",
    "Notebook",
    "Cup",
    "Mug",
    "Stapler",
    "Marker",
    "Eraser",
    "Ruler",
    "Folder",
];

/// Size variants with their price addon in cents
const SIZES: &[(&str, i64)] = &[("Small", 0), ("Medium", 100), ("Large", 250), ("Pack", 400)];

/// Summary printed with `--json`.
#[derive(Debug, Serialize)]
struct SeedSummary {
    items: usize,
    deleted_items: usize,
    carts: Vec<Cart>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut item_count: usize = 40;
    let mut cart_count: usize = 10;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--items" | "-i" => {
                if i + 1 < args.len() {
                    item_count = args[i + 1].parse().unwrap_or(item_count);
                    i += 1;
                }
            }
            "--carts" | "-c" => {
                if i + 1 < args.len() {
                    cart_count = args[i + 1].parse().unwrap_or(cart_count);
                    i += 1;
                }
            }
            "--json" => json = true,
            "--help" | "-h" => {
                println!("Shop Store Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -i, --items <N>    Number of items to create (default: 40)");
                println!("  -c, --carts <N>    Number of carts to create (default: 10)");
                println!("      --json         Print the carts as JSON");
                println!("  -h, --help         Show this help message");
                println!();
                println!("Environment: SHOP_DEFAULT_LIMIT, SHOP_AVAILABILITY, RUST_LOG");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let store = Store::new(StoreConfig::from_env());
    let items = store.items();
    let carts = store.carts();

    println!("Shop Store Seed Data Generator");
    println!("==============================");
    println!("Items: {}", item_count);
    println!("Carts: {}", cart_count);
    println!("Availability: {:?}", store.config().availability);
    println!();

    // Items
    let mut deleted = 0;
    for seed in 0..item_count {
        let (name, price) = demo_item(seed);
        let item = items.create(name, price).await?;

        if seed % 7 == 6 {
            items.soft_delete(item.id()).await?;
            deleted += 1;
        }
    }
    println!("✓ Created {} items ({} soft-deleted)", item_count, deleted);

    // Carts
    if item_count > 0 {
        for seed in 0..cart_count {
            let cart = carts.create().await;
            for pick in demo_picks(seed, item_count) {
                carts.add_item(cart.id(), pick).await?;
            }
        }
    } else {
        for _ in 0..cart_count {
            carts.create().await;
        }
    }
    println!("✓ Created {} carts", cart_count);

    // Read back through the list operations
    let visible = items
        .list(&ItemFilter {
            page: Page::new(0, i64::MAX),
            ..Default::default()
        })
        .await?;
    let all_carts = carts
        .list(&CartFilter {
            page: Page::new(0, i64::MAX),
            ..Default::default()
        })
        .await?;

    println!();
    println!("Visible items: {}", visible.len());
    println!("First page of carts (limit {}):", store.config().default_limit);
    let first_page = carts
        .list(&CartFilter {
            page: store.config().default_page(),
            ..Default::default()
        })
        .await?;
    for cart in &first_page {
        println!(
            "  cart {:>3}: {:>2} lines, {:>3} units, {}",
            cart.id(),
            cart.lines().len(),
            cart.total_quantity(),
            cart.price()
        );
    }

    let grand_total: Money = all_carts.iter().map(Cart::price).sum();
    println!();
    println!("Grand total across carts: {}", grand_total);

    if json {
        let summary = SeedSummary {
            items: items.count().await,
            deleted_items: deleted,
            carts: all_carts,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins when set, e.g. `RUST_LOG=shop=debug`.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,shop=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Name and price of the `seed`-th demo item.
fn demo_item(seed: usize) -> (String, Money) {
    let product = PRODUCTS[seed % PRODUCTS.len()];
    let (size, addon) = SIZES[(seed / PRODUCTS.len()) % SIZES.len()];

    // 0.99 - 4.99 plus the size addon
    let base = 99 + ((seed * 37) % 400) as i64;

    (format!("{} {}", product, size), Money::from_cents(base + addon))
}

/// Item ids to add to the `seed`-th cart. Repeats are intentional.
fn demo_picks(seed: usize, item_count: usize) -> Vec<ItemId> {
    let adds = 1 + seed % 5;
    (0..adds)
        .map(|n| ItemId::new(((seed * 3 + n / 2) % item_count) as u64))
        .collect()
}
