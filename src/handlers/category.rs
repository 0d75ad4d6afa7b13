// src/handlers/category.rs
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{error, instrument};

use crate::dtos::category::CategoryResponse;
use crate::error::AppError;
use crate::models::category::Category;
use crate::state::AppState;

// GET /categories - List all categories
#[instrument(skip(state))]
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, AppError> {
    match sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id")
        .fetch_all(&state.db_pool)
        .await
    {
        Ok(categories) => {
            let response = categories.into_iter().map(CategoryResponse::from).collect();
            Ok(Json(response))
        }
        Err(e) => {
            error!(?e, "Failed to fetch categories");
            Err(e.into())
        }
    }
}

// GET /categories/{id} - Get single category
#[instrument(skip(state))]
pub async fn get_category(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<CategoryResponse>, AppError> {
    let category = sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = ?")
        .bind(id)
        .fetch_optional(&state.db_pool)
        .await?
        .ok_or_else(|| AppError::not_found("Category not found"))?;

    Ok(Json(CategoryResponse::from(category)))
}
