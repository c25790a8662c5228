//! Data access repositories.

pub mod category_item;
pub mod media_type;

pub use category_item::{CategoryItemRepository, CategoryItemWithContent};
pub use media_type::MediaTypeRepository;
