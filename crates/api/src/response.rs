//! API response types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;

/// Path the admin category item routes are mounted on.
///
/// The server binary nests [`crate::router`] under `/admin`; redirects issued
/// by the POST handlers must resolve against that absolute path.
pub const CATEGORY_ITEMS_PATH: &str = "/admin/category-items";

/// Standard success envelope for view models.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a success response.
    pub const fn ok(data: T) -> Self {
        Self { data }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// See-other redirect to the item list scoped to a category.
#[must_use]
pub fn redirect_to_list(category_id: i32) -> Redirect {
    Redirect::to(&format!("{CATEGORY_ITEMS_PATH}?categoryId={category_id}"))
}
