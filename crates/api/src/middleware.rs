//! API middleware.

#![allow(missing_docs)]

use techtree_core::{CategoryItemService, MediaTypeService};

/// Application state.
#[derive(Clone)]
pub struct AppState {
    pub category_item_service: CategoryItemService,
    pub media_type_service: MediaTypeService,
}
