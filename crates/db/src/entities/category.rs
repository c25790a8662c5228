//! Category entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category model. Owner of category items.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category")]
pub struct Model {
    /// Unique category ID (store-generated).
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Display title of the category.
    pub title: String,
}

/// Relationships.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::category_item::Entity")]
    CategoryItems,
}

impl Related<super::category_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CategoryItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
