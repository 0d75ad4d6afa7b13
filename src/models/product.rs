use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i64,
    pub category_id: i64,
}

/// A product row joined with the name of the category that owns it.
#[derive(Debug, Clone, FromRow)]
pub struct ProductWithCategory {
    #[sqlx(flatten)]
    pub product: Product,
    pub category_name: String,
}
