// src/seed.rs
use std::collections::HashMap;

use sqlx::SqlitePool;
use tracing::{debug, info, instrument};

use crate::error::AppError;

pub struct SeedProduct {
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub price: f64,
    pub stock: i64,
    pub category: &'static str,
}

pub const SEED_CATEGORIES: [&str; 3] = ["Electronics", "Fashion", "Home & Garden"];

pub const SEED_PRODUCTS: [SeedProduct; 4] = [
    SeedProduct {
        name: "Smartphone X",
        description: Some("Latest model smartphone with an edge-to-edge display and triple camera"),
        price: 999.00,
        stock: 25,
        category: "Electronics",
    },
    SeedProduct {
        name: "Wireless Headphones",
        description: Some("Noise-cancelling over-ear headphones with 30 hours of battery life"),
        price: 199.99,
        stock: 40,
        category: "Electronics",
    },
    SeedProduct {
        name: "Leather Jacket",
        description: Some("Classic black jacket in genuine leather"),
        price: 149.50,
        stock: 15,
        category: "Fashion",
    },
    SeedProduct {
        name: "Ceramic Plant Pot",
        description: Some("Hand-glazed pot for indoor plants, 20 cm"),
        price: 24.90,
        stock: 60,
        category: "Home & Garden",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded { categories: usize, products: usize },
    AlreadySeeded,
}

/// Inserts the sample catalogue when the store has no categories yet.
///
/// Runs in a single transaction. Categories are inserted first and their
/// generated ids are read back, then each product is inserted against the
/// id of its category. A store that already has at least one category is
/// left untouched.
#[instrument(skip(pool))]
pub async fn seed_initial_data(pool: &SqlitePool) -> Result<SeedOutcome, AppError> {
    let mut tx = pool.begin().await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        info!(existing, "Categories present, skipping seed");
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let mut category_ids = HashMap::with_capacity(SEED_CATEGORIES.len());
    for name in SEED_CATEGORIES {
        let id: i64 = sqlx::query_scalar("INSERT INTO categories (name) VALUES (?) RETURNING id")
            .bind(name)
            .fetch_one(&mut *tx)
            .await?;
        debug!(id, name, "Inserted category");
        category_ids.insert(name, id);
    }

    for product in &SEED_PRODUCTS {
        let category_id = *category_ids.get(product.category).ok_or_else(|| {
            AppError::config(format!(
                "Seed product '{}' references unknown category '{}'",
                product.name, product.category
            ))
        })?;

        sqlx::query(
            "INSERT INTO products (name, description, price, stock, category_id)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(product.name)
        .bind(product.description)
        .bind(product.price)
        .bind(product.stock)
        .bind(category_id)
        .execute(&mut *tx)
        .await?;
        debug!(name = product.name, category_id, "Inserted product");
    }

    tx.commit().await?;

    info!(
        categories = SEED_CATEGORIES.len(),
        products = SEED_PRODUCTS.len(),
        "Seeded initial catalogue"
    );
    Ok(SeedOutcome::Seeded {
        categories: SEED_CATEGORIES.len(),
        products: SEED_PRODUCTS.len(),
    })
}
