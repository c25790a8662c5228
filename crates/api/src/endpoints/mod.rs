//! API endpoints.

mod category_items;

use axum::Router;

use crate::middleware::AppState;

/// Create the admin API router.
pub fn router() -> Router<AppState> {
    Router::new().nest("/category-items", category_items::router())
}
