//! Content entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Content model. Joined into category item listings for display only.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "content")]
pub struct Model {
    /// Unique content ID (store-generated).
    #[sea_orm(primary_key)]
    pub id: i32,

    /// The category item this content belongs to.
    pub category_item_id: i32,

    /// Display title of the content.
    pub title: String,
}

/// Relationships.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category_item::Entity",
        from = "Column::CategoryItemId",
        to = "super::category_item::Column::Id"
    )]
    CategoryItem,
}

impl Related<super::category_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CategoryItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
