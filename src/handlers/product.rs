// src/handlers/product.rs
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{error, instrument};

use crate::dtos::product::ProductResponse;
use crate::error::AppError;
use crate::models::product::ProductWithCategory;
use crate::state::AppState;

const SELECT_PRODUCTS: &str = "SELECT p.id, p.name, p.description, p.price, p.stock, p.category_id,
        c.name AS category_name
 FROM products p
 JOIN categories c ON c.id = p.category_id";

// GET /products - List all products
#[instrument(skip(state))]
pub async fn get_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let query = format!("{SELECT_PRODUCTS} ORDER BY p.id");
    match sqlx::query_as::<_, ProductWithCategory>(&query)
        .fetch_all(&state.db_pool)
        .await
    {
        Ok(products) => {
            let response = products.into_iter().map(ProductResponse::from).collect();
            Ok(Json(response))
        }
        Err(e) => {
            error!(?e, "Failed to fetch products");
            Err(e.into())
        }
    }
}

// GET /products/{id} - Get single product
#[instrument(skip(state))]
pub async fn get_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let query = format!("{SELECT_PRODUCTS} WHERE p.id = ?");
    let product = sqlx::query_as::<_, ProductWithCategory>(&query)
        .bind(id)
        .fetch_optional(&state.db_pool)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    Ok(Json(ProductResponse::from(product)))
}
