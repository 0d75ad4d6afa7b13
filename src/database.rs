// src/database.rs
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, info, instrument};

use crate::error::AppError;

const CREATE_CATEGORIES: &str = r#"CREATE TABLE IF NOT EXISTS categories (
    id   INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(50) NOT NULL UNIQUE
)"#;

const CREATE_PRODUCTS: &str = r#"CREATE TABLE IF NOT EXISTS products (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        VARCHAR(100) NOT NULL,
    description TEXT,
    price       REAL NOT NULL,
    stock       INTEGER NOT NULL DEFAULT 0,
    category_id INTEGER NOT NULL REFERENCES categories (id)
)"#;

/// Opens a pool on a `sqlite:` URL, creating the database file if it
/// does not exist yet.
#[instrument]
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    info!("Database connection opened");
    Ok(pool)
}

/// Creates the `categories` and `products` tables. Existing tables are left alone.
#[instrument(skip(pool))]
pub async fn create_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for statement in [CREATE_CATEGORIES, CREATE_PRODUCTS] {
        sqlx::query(statement).execute(pool).await?;
    }
    debug!("Schema ensured");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn create_tables_is_repeatable() {
        let pool = setup_test_db().await;
        create_tables(&pool).await.unwrap();

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('categories', 'products') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        assert_eq!(tables, vec!["categories", "products"]);
    }

    #[tokio::test]
    async fn category_names_are_unique() {
        let pool = setup_test_db().await;
        sqlx::query("INSERT INTO categories (name) VALUES ('Books')")
            .execute(&pool)
            .await
            .unwrap();

        let duplicate = sqlx::query("INSERT INTO categories (name) VALUES ('Books')")
            .execute(&pool)
            .await;
        assert!(duplicate.is_err());
    }

    #[tokio::test]
    async fn product_requires_existing_category() {
        let pool = setup_test_db().await;
        let orphan = sqlx::query(
            "INSERT INTO products (name, price, category_id) VALUES ('Orphan', 1.0, 42)",
        )
        .execute(&pool)
        .await;
        assert!(orphan.is_err());
    }

    #[tokio::test]
    async fn stock_defaults_to_zero() {
        let pool = setup_test_db().await;
        let category_id: i64 =
            sqlx::query_scalar("INSERT INTO categories (name) VALUES ('Books') RETURNING id")
                .fetch_one(&pool)
                .await
                .unwrap();
        let stock: i64 = sqlx::query_scalar(
            "INSERT INTO products (name, price, category_id) VALUES ('Novel', 12.5, ?) RETURNING stock",
        )
        .bind(category_id)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(stock, 0);
    }

    #[tokio::test]
    async fn create_pool_opens_in_memory_store() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        let one: i64 = sqlx::query_scalar("SELECT 1").fetch_one(&pool).await.unwrap();
        assert_eq!(one, 1);
    }
}
