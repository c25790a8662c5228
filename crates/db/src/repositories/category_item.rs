//! Category item repository.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    JoinType, NotSet, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    Set,
};
use serde::Serialize;
use techtree_common::{AppError, AppResult};

use crate::entities::{CategoryItem, category_item, content};

/// A category item row joined with its content, as shown in list views.
///
/// `content_id` is `None` when no content row references the item.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct CategoryItemWithContent {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub category_id: i32,
    pub media_type_id: i32,
    pub released_at: DateTime<Utc>,
    pub content_id: Option<i32>,
}

/// Repository for category item operations.
#[derive(Clone)]
pub struct CategoryItemRepository {
    db: Arc<DatabaseConnection>,
}

impl CategoryItemRepository {
    /// Create a new category item repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a category item by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<category_item::Model>> {
        CategoryItem::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find all items of a category, left-joined against content.
    ///
    /// Ordered by ascending ID (insertion order).
    pub async fn find_by_category(
        &self,
        category_id: i32,
    ) -> AppResult<Vec<CategoryItemWithContent>> {
        CategoryItem::find()
            .filter(category_item::Column::CategoryId.eq(category_id))
            .column_as(content::Column::Id, "content_id")
            .join(JoinType::LeftJoin, category_item::Relation::Content.def())
            .order_by(category_item::Column::Id, Order::Asc)
            .into_model::<CategoryItemWithContent>()
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Check whether a category item exists.
    pub async fn exists(&self, id: i32) -> AppResult<bool> {
        let count = CategoryItem::find_by_id(id)
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(count > 0)
    }

    /// Insert a new category item. The ID is store-generated.
    pub async fn create(
        &self,
        title: String,
        description: Option<String>,
        category_id: i32,
        media_type_id: i32,
        released_at: DateTime<Utc>,
    ) -> AppResult<category_item::Model> {
        let active_model = category_item::ActiveModel {
            id: NotSet,
            title: Set(title),
            description: Set(description),
            category_id: Set(category_id),
            media_type_id: Set(media_type_id),
            released_at: Set(released_at),
        };

        active_model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Replace every editable column of an existing category item.
    ///
    /// A lost update (the row vanished between read and commit) surfaces as
    /// `NotFound`; any other commit conflict surfaces as `Conflict` and is
    /// not retried.
    pub async fn update(
        &self,
        id: i32,
        title: String,
        description: Option<String>,
        category_id: i32,
        media_type_id: i32,
        released_at: DateTime<Utc>,
    ) -> AppResult<category_item::Model> {
        let active_model = category_item::ActiveModel {
            id: Set(id),
            title: Set(title),
            description: Set(description),
            category_id: Set(category_id),
            media_type_id: Set(media_type_id),
            released_at: Set(released_at),
        };

        match active_model.update(self.db.as_ref()).await {
            Ok(model) => Ok(model),
            Err(DbErr::RecordNotUpdated) => {
                if self.exists(id).await? {
                    Err(AppError::Conflict(format!(
                        "Category item {id} changed during update"
                    )))
                } else {
                    Err(AppError::NotFound(format!("Category item not found: {id}")))
                }
            }
            Err(e) => Err(AppError::Database(e.to_string())),
        }
    }

    /// Delete a category item by ID.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        CategoryItem::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};

    fn create_test_item(id: i32, title: &str, category_id: i32) -> category_item::Model {
        category_item::Model {
            id,
            title: title.to_string(),
            description: None,
            category_id,
            media_type_id: 2,
            released_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn list_row(id: i32, title: &str, category_id: i32, content_id: Option<i32>) -> std::collections::BTreeMap<&'static str, Value> {
        maplit::btreemap! {
            "id" => Value::Int(Some(id)),
            "title" => Value::from(title),
            "description" => Value::String(None),
            "category_id" => Value::Int(Some(category_id)),
            "media_type_id" => Value::Int(Some(2)),
            "released_at" => Value::from(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            "content_id" => Value::Int(content_id),
        }
    }

    #[tokio::test]
    async fn test_find_by_id_returns_item() {
        let item = create_test_item(1, "GPU Architecture", 1);

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[item.clone()]])
                .into_connection(),
        );

        let repo = CategoryItemRepository::new(db);
        let result = repo.find_by_id(1).await.unwrap();

        assert!(result.is_some());
        let found = result.unwrap();
        assert_eq!(found.id, 1);
        assert_eq!(found.title, "GPU Architecture");
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<category_item::Model>::new()])
                .into_connection(),
        );

        let repo = CategoryItemRepository::new(db);
        let result = repo.find_by_id(99).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_find_by_category_maps_content_id() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[
                    list_row(1, "With content", 1, Some(10)),
                    list_row(2, "Without content", 1, None),
                ]])
                .into_connection(),
        );

        let repo = CategoryItemRepository::new(db);
        let rows = repo.find_by_category(1).await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].content_id, Some(10));
        assert_eq!(rows[1].content_id, None);
        assert!(rows.iter().all(|r| r.category_id == 1));
    }

    #[tokio::test]
    async fn test_exists_returns_true_for_present_row() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[maplit::btreemap! {
                    "num_items" => Value::BigInt(Some(1))
                }]])
                .into_connection(),
        );

        let repo = CategoryItemRepository::new(db);
        assert!(repo.exists(1).await.unwrap());
    }

    #[tokio::test]
    async fn test_create_inserts_and_returns_row() {
        let item = create_test_item(5, "GPU", 1);

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[item.clone()]])
                .append_exec_results([MockExecResult {
                    last_insert_id: 5,
                    rows_affected: 1,
                }])
                .into_connection(),
        );

        let repo = CategoryItemRepository::new(db);
        let created = repo
            .create("GPU".to_string(), None, 1, 2, item.released_at)
            .await
            .unwrap();

        assert_eq!(created.id, 5);
        assert_eq!(created.category_id, 1);
    }

    #[tokio::test]
    async fn test_update_lost_row_downgrades_to_not_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                // UPDATE .. RETURNING matches nothing
                .append_query_results([Vec::<category_item::Model>::new()])
                // existence probe finds no row either
                .append_query_results([[maplit::btreemap! {
                    "num_items" => Value::BigInt(Some(0))
                }]])
                .into_connection(),
        );

        let repo = CategoryItemRepository::new(db);
        let err = repo
            .update(
                7,
                "Renamed".to_string(),
                None,
                1,
                2,
                Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_conflict_on_surviving_row() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<category_item::Model>::new()])
                // the row still exists, so the failed commit is a conflict
                .append_query_results([[maplit::btreemap! {
                    "num_items" => Value::BigInt(Some(1))
                }]])
                .into_connection(),
        );

        let repo = CategoryItemRepository::new(db);
        let err = repo
            .update(
                7,
                "Renamed".to_string(),
                None,
                1,
                2,
                Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .into_connection(),
        );

        let repo = CategoryItemRepository::new(db);
        assert!(repo.delete(1).await.is_ok());
    }
}
