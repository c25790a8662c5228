//! Media type repository.

use std::sync::Arc;

use sea_orm::{DatabaseConnection, EntityTrait, Order, QueryOrder};
use techtree_common::{AppError, AppResult};

use crate::entities::{MediaType, media_type};

/// Repository for the media type lookup table.
#[derive(Clone)]
pub struct MediaTypeRepository {
    db: Arc<DatabaseConnection>,
}

impl MediaTypeRepository {
    /// Create a new media type repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find all media types, ordered by ID.
    pub async fn find_all(&self) -> AppResult<Vec<media_type::Model>> {
        MediaType::find()
            .order_by(media_type::Column::Id, Order::Asc)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
