//! Data seeder for the catalog server.
//!
//! Writes a deterministic item collection to the configured data path by
//! cycling a small set of base products. Quantity comes from the first
//! command-line argument (default 100).
//!
//! ```text
//! cargo run --bin seed_items -- 500
//! ```

use std::fs;

use anyhow::{Context, Result};

use catalog_server::catalog::Item;
use catalog_server::Config;

/// The base products the generated collection cycles through.
fn base_items() -> Vec<Item> {
    let raw = [
        ("Laptop Pro", "Electronics", 2499.0),
        ("Noise Cancelling Headphones", "Electronics", 399.0),
        ("Ultra-Wide Monitor", "Electronics", 999.0),
        ("Ergonomic Chair", "Furniture", 799.0),
        ("Standing Desk", "Furniture", 1199.0),
    ];

    raw.iter()
        .enumerate()
        .map(|(i, (name, category, price))| Item {
            id: i as i64 + 1,
            name: name.to_string(),
            category: category.to_string(),
            price: *price,
            image: None,
        })
        .collect()
}

/// Generates `quantity` items from the base set.
///
/// Names get a running suffix and prices a running offset so searches and
/// statistics have something to bite on.
fn generate_items(quantity: usize) -> Vec<Item> {
    let base = base_items();

    (0..quantity)
        .map(|i| {
            let template = &base[i % base.len()];
            Item {
                id: i as i64 + 1,
                name: format!("{} #{}", template.name, i + 1),
                category: template.category.clone(),
                price: template.price + i as f64 * 10.0,
                image: template.image.clone(),
            }
        })
        .collect()
}

fn main() -> Result<()> {
    let quantity: usize = std::env::args()
        .nth(1)
        .and_then(|v| v.parse().ok())
        .unwrap_or(100);

    let config = Config::from_env();
    let items = generate_items(quantity);

    if let Some(parent) = config.data_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating data directory {}", parent.display()))?;
    }
    fs::write(&config.data_path, serde_json::to_vec_pretty(&items)?)
        .with_context(|| format!("writing item data to {}", config.data_path.display()))?;

    println!("{} items generated at {}", quantity, config.data_path.display());
    Ok(())
}
