//! # Seed Data Generator
//!
//! Populates the database with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 500 products (default)
//! cargo run -p atlas-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p atlas-db --bin seed -- --count 2000
//!
//! # Specify database path
//! cargo run -p atlas-db --bin seed -- --db ./data/atlas.db
//! ```
//!
//! ## Generated Products
//! Creates product data across a handful of categories, each with:
//! - Unique code: `{CAT}{INDEX}` (e.g. `ELE0042`)
//! - Deterministic pseudo-random price, stock and minimum threshold
//! - Roughly one in twelve products deactivated, to exercise the
//!   active-only totals and status queries

use std::env;

use atlas_core::{Product, ProductRepository};
use atlas_db::{Database, DbConfig};

/// Category label and base names for sample data.
const CATEGORIES: &[(&str, &str, &[&str])] = &[
    (
        "ELE",
        "Electronics",
        &["Laptop", "Mouse", "Keyboard", "Monitor", "Printer", "Webcam", "Headset", "Hub"],
    ),
    (
        "FUR",
        "Furniture",
        &["Desk", "Chair", "Shelf", "Cabinet", "Lamp", "Stool"],
    ),
    (
        "STA",
        "Stationery",
        &["Notebook", "Pen Pack", "Stapler", "Binder", "Marker Set", "Envelope Box"],
    ),
    (
        "APP",
        "Appliances",
        &["Kettle", "Toaster", "Blender", "Microwave", "Fan", "Heater"],
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 500;
    let mut db_path = String::from("./atlas_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(500);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Atlas Inventory Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 500)");
                println!("  -d, --db <PATH>    Database file path (default: ./atlas_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Atlas Inventory Seed Data Generator");
    println!("======================================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    // Connect to database
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing products
    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating products...");

    let repo = db.products();
    let mut generated = 0;
    let start = std::time::Instant::now();

    for seed in 0..count {
        let (prefix, category, names) = CATEGORIES[seed % CATEGORIES.len()];
        let product = generate_product(prefix, category, names, seed);

        if !repo.save(&product).await {
            eprintln!("Failed to insert {}", product.code);
            continue;
        }

        generated += 1;
        if generated % 100 == 0 {
            println!("  Generated {} products...", generated);
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} products in {:?}", generated, elapsed);

    let total = db.products().count().await?;
    println!("  Total rows: {}", total);

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates a single product with deterministic pseudo-random data.
fn generate_product(prefix: &str, category: &str, names: &[&str], seed: usize) -> Product {
    let name = format!("{} {}", names[seed % names.len()], seed / names.len() + 1);
    let code = format!("{}{:04}", prefix, seed);

    // Price between 5.00 and 405.00 in cents-of-a-unit steps
    let price = 5.0 + ((seed * 37) % 400) as f64 + ((seed * 7) % 100) as f64 / 100.0;

    // Stock 0-60, threshold 2-12
    let stock = (seed * 13 % 61) as i64;
    let min_stock = (2 + seed * 5 % 11) as i64;

    let product = Product::new(code, name, category, price, stock, min_stock);

    // Deactivate roughly one in twelve
    if seed % 12 == 11 {
        product.with_active(false)
    } else {
        product
    }
}
