//! Category item service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use techtree_common::{AppError, AppResult};
use techtree_db::entities::category_item;
use techtree_db::repositories::{CategoryItemRepository, CategoryItemWithContent};
use validator::Validate;

/// Editable fields of a category item, bound from the admin form.
///
/// This enumerates exactly the fields a caller may supply; everything else on
/// the record is store-owned.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryItemInput {
    /// Record ID echoed by edit forms; 0 for new items.
    #[serde(default)]
    pub id: i32,
    #[validate(length(
        min = 2,
        max = 200,
        message = "title must be between 2 and 200 characters"
    ))]
    pub title: String,
    #[validate(length(max = 2000, message = "description must be at most 2000 characters"))]
    pub description: Option<String>,
    pub category_id: i32,
    pub media_type_id: i32,
    pub released_at: DateTime<Utc>,
}

/// Service for managing category items.
#[derive(Clone)]
pub struct CategoryItemService {
    item_repo: CategoryItemRepository,
}

impl CategoryItemService {
    /// Create a new category item service.
    #[must_use]
    pub const fn new(item_repo: CategoryItemRepository) -> Self {
        Self { item_repo }
    }

    /// List the items of a category with their joined content IDs.
    pub async fn list_for_category(
        &self,
        category_id: i32,
    ) -> AppResult<Vec<CategoryItemWithContent>> {
        self.item_repo.find_by_category(category_id).await
    }

    /// Get a category item by ID.
    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<category_item::Model>> {
        self.item_repo.find_by_id(id).await
    }

    /// Create a new category item from validated input.
    pub async fn create(&self, input: CategoryItemInput) -> AppResult<category_item::Model> {
        input.validate()?;

        self.item_repo
            .create(
                input.title,
                input.description,
                input.category_id,
                input.media_type_id,
                input.released_at,
            )
            .await
    }

    /// Update a category item, replacing every editable field.
    ///
    /// `id` comes from the request path and must match the bound record ID;
    /// a mismatch is `NotFound` and never reaches the store.
    pub async fn update(
        &self,
        id: i32,
        input: CategoryItemInput,
    ) -> AppResult<category_item::Model> {
        if id != input.id {
            return Err(AppError::NotFound(format!("Category item not found: {id}")));
        }

        input.validate()?;

        self.item_repo
            .update(
                id,
                input.title,
                input.description,
                input.category_id,
                input.media_type_id,
                input.released_at,
            )
            .await
    }

    /// Delete a category item, returning the removed row.
    ///
    /// The row is fetched first so an ID that vanished after the
    /// confirmation view answers `NotFound` rather than failing the removal.
    pub async fn delete(&self, id: i32) -> AppResult<category_item::Model> {
        let item = self
            .item_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category item not found: {id}")))?;

        self.item_repo.delete(id).await?;

        Ok(item)
    }
}
