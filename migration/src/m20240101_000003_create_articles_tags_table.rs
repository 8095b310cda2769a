use sea_orm_migration::prelude::*;

/// Both foreign keys cascade: removing an article or a tag removes its
/// taggings and leaves the other parent untouched.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArticlesTags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ArticlesTags::ArticleId).integer().not_null())
                    .col(ColumnDef::new(ArticlesTags::TagId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk-articles_tags")
                            .col(ArticlesTags::ArticleId)
                            .col(ArticlesTags::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-articles_tags-article_id")
                            .from(ArticlesTags::Table, ArticlesTags::ArticleId)
                            .to(Article::Table, Article::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-articles_tags-tag_id")
                            .from(ArticlesTags::Table, ArticlesTags::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArticlesTags::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ArticlesTags {
    Table,
    ArticleId,
    TagId,
}

#[derive(DeriveIden)]
enum Article {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Tag {
    Table,
    Id,
}
