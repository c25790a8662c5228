//! Media type lookup entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Media type model. Reference data selectable per category item.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "media_type")]
pub struct Model {
    /// Unique media type ID (store-generated).
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Display title of the media type.
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
