//! Create `category_item` table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CategoryItem::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CategoryItem::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CategoryItem::Title).string_len(200).not_null())
                    .col(ColumnDef::new(CategoryItem::Description).text())
                    .col(ColumnDef::new(CategoryItem::CategoryId).integer().not_null())
                    .col(ColumnDef::new(CategoryItem::MediaTypeId).integer().not_null())
                    .col(
                        ColumnDef::new(CategoryItem::ReleasedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_category_item_category")
                            .from(CategoryItem::Table, CategoryItem::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_category_item_media_type")
                            .from(CategoryItem::Table, CategoryItem::MediaTypeId)
                            .to(MediaType::Table, MediaType::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: category_id (for the list-by-category query)
        manager
            .create_index(
                Index::create()
                    .name("idx_category_item_category_id")
                    .table(CategoryItem::Table)
                    .col(CategoryItem::CategoryId)
                    .to_owned(),
            )
            .await?;

        // Index: media_type_id
        manager
            .create_index(
                Index::create()
                    .name("idx_category_item_media_type_id")
                    .table(CategoryItem::Table)
                    .col(CategoryItem::MediaTypeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CategoryItem::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CategoryItem {
    Table,
    Id,
    Title,
    Description,
    CategoryId,
    MediaTypeId,
    ReleasedAt,
}

#[derive(Iden)]
enum Category {
    Table,
    Id,
}

#[derive(Iden)]
enum MediaType {
    Table,
    Id,
}
