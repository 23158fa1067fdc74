//! # Seed Data Generator
//!
//! Populates a database with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 200 products (default)
//! cargo run -p stockroom-db --bin seed
//!
//! # Generate custom amount into a specific file
//! cargo run -p stockroom-db --bin seed -- --count 1000 --db ./data/stockroom.db
//! ```
//!
//! Products are inserted through the [`InventoryManager`], so the seeded
//! file is exactly what the front end would have produced.

use std::env;
use stockroom_db::{DbConfig, InventoryManager};

/// Hardware categories for realistic test data
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Fasteners",
        &[
            "Hex Bolt", "Carriage Bolt", "Wood Screw", "Machine Screw", "Hex Nut", "Lock Nut",
            "Wing Nut", "Flat Washer", "Spring Washer", "Rivet",
        ],
    ),
    (
        "Electrical",
        &[
            "Cable Tie", "Wire Nut", "Fuse", "Terminal Block", "Heat Shrink", "Junction Box",
            "Breaker", "Relay",
        ],
    ),
    (
        "Plumbing",
        &[
            "Elbow Fitting", "Tee Fitting", "Ball Valve", "Pipe Clamp", "Hose Clamp", "O-Ring",
            "Coupling",
        ],
    ),
];

/// Size variants for products
const SIZES: &[&str] = &["M3", "M4", "M5", "M6", "M8", "M10", "1/4in", "3/8in", "1/2in"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 200;
    let mut db_path = String::from("./stockroom_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(200);
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
                println!("Stockroom Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 200)");
                println!("  -d, --db <PATH>    Database file path (default: ./stockroom_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Stockroom Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let mut inventory = InventoryManager::open(DbConfig::new(&db_path)).await?;

    let existing = inventory.len()?;
    if existing > 0 {
        println!("Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        inventory.close().await?;
        return Ok(());
    }

    println!("Generating products...");

    let start = std::time::Instant::now();
    let names = sample_names().take(count);
    let mut generated = 0;

    for (seed, name) in names.enumerate() {
        // Stock level 0-250, varied but deterministic
        let quantity = ((seed * 37) % 251) as i64;

        if let Err(e) = inventory.add(&name, quantity).await {
            eprintln!("Failed to insert {}: {}", name, e);
            continue;
        }

        generated += 1;
        if generated % 100 == 0 {
            println!("  Generated {} products...", generated);
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("Generated {} products in {:?}", generated, elapsed);

    println!();
    println!("Verifying search...");
    println!("  Search 'bolt': {} results", inventory.search("bolt")?.len());
    println!("  Search 'm8': {} results", inventory.search("m8")?.len());

    inventory.close().await?;

    println!();
    println!("Seed complete!");
    Ok(())
}

/// Endless, repeating stream of "<item> <size>" names. After one full pass
/// a batch number is appended so names stay distinct.
fn sample_names() -> impl Iterator<Item = String> {
    let per_pass: Vec<String> = CATEGORIES
        .iter()
        .flat_map(|(_, items)| items.iter())
        .flat_map(|item| SIZES.iter().map(move |size| format!("{} {}", item, size)))
        .collect();

    (0..).flat_map(move |pass| {
        per_pass
            .clone()
            .into_iter()
            .map(move |name| match pass {
                0 => name,
                n => format!("{} #{}", name, n + 1),
            })
    })
}
