pub mod categories;
pub mod products;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::health::health_check;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(products::routes())
        .merge(categories::routes())
}

/// Full application: health routes, catalogue routes served both bare and
/// under `/api`, request tracing and CORS.
pub fn create_app(state: AppState, cors: CorsLayer) -> Router {
    let api = create_router();

    Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
        .merge(api.clone())
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
