//! Business logic services.

#![allow(missing_docs)]

pub mod category_item;
pub mod media_type;

pub use category_item::{CategoryItemInput, CategoryItemService};
pub use media_type::MediaTypeService;
