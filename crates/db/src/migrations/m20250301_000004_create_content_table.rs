//! Create content table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Content::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Content::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Content::CategoryItemId).integer().not_null())
                    .col(ColumnDef::new(Content::Title).string_len(200).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_content_category_item")
                            .from(Content::Table, Content::CategoryItemId)
                            .to(CategoryItem::Table, CategoryItem::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: category_item_id (for the list-view left join)
        manager
            .create_index(
                Index::create()
                    .name("idx_content_category_item_id")
                    .table(Content::Table)
                    .col(Content::CategoryItemId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Content::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Content {
    Table,
    Id,
    CategoryItemId,
    Title,
}

#[derive(Iden)]
enum CategoryItem {
    Table,
    Id,
}
