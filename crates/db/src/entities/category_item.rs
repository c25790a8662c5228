//! Category item entity.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category item model. A single entry belonging to a category, optionally
/// linked to content and a media type.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category_item")]
pub struct Model {
    /// Unique item ID (store-generated, immutable once created).
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Item title. Length in [2, 200], enforced before persistence.
    pub title: String,

    /// Optional longer description.
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    /// Owning category.
    pub category_id: i32,

    /// Selected media type (lookup data).
    pub media_type_id: i32,

    /// When the item was released.
    pub released_at: DateTime<Utc>,
}

/// Relationships.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::media_type::Entity",
        from = "Column::MediaTypeId",
        to = "super::media_type::Column::Id"
    )]
    MediaType,
    #[sea_orm(has_many = "super::content::Entity")]
    Content,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::media_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaType.def()
    }
}

impl Related<super::content::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Content.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
