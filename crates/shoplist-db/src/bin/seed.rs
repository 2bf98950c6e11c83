//! # Catalog Seeder
//!
//! Migrates a database file and inserts the unit measurements and items.
//!
//! ## Usage
//! ```bash
//! # Seed the default database
//! cargo run -p shoplist-db --bin seed
//!
//! # Specify database path
//! cargo run -p shoplist-db --bin seed -- --db ./data/shoplist.db
//! ```
//!
//! Running it against an already seeded database changes nothing.

use std::env;

use shoplist_db::{Database, DbConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./shoplist.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Shoplist Catalog Seeder");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./shoplist.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Shoplist Catalog Seeder");
    println!("=======================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    if db.seed_catalog().await? {
        println!("✓ Catalog seeded");
    } else {
        println!("⚠ Catalog already present, nothing inserted");
    }

    let units = db.catalog().list_units().await?;
    let items = db.catalog().list_items().await?;

    println!();
    println!("Units: {}", units.len());
    for unit in &units {
        println!("  {:>2}  {}", unit.id, unit.title);
    }

    println!("Items: {}", items.len());
    for item in &items {
        println!(
            "  {:>2}  {:<24} {:>8.2}  {:>5.1}%",
            item.id, item.title, item.price, item.discount_percentage
        );
    }

    db.close().await;

    Ok(())
}
