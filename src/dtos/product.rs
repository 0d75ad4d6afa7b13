// src/dtos/product.rs
use serde::Serialize;

use crate::models::product::ProductWithCategory;

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub stock: i64,
    pub category_id: i64,
    /// Name of the owning category.
    pub category: String,
}

// The joined row carries the owning category's name alongside `category_id`.
impl From<ProductWithCategory> for ProductResponse {
    fn from(row: ProductWithCategory) -> Self {
        let product = row.product;
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            category_id: product.category_id,
            category: row.category_name,
        }
    }
}
