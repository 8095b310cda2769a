use ::entity::{
    article, articles_tag,
    prelude::{Article, ArticlesTag, Tag},
    tag,
};
use sea_orm::*;
use serde::Serialize;

/// A join row composed with both of its parents.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct TaggedArticle {
    pub article_id: i32,
    pub tag_id: i32,
    pub title: String,
    pub tag_name: String,
}

pub struct Query;

impl Query {
    pub async fn find_article_by_id<C>(db: &C, id: i32) -> Result<Option<article::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Article::find_by_id(id).one(db).await
    }

    pub async fn find_tag_by_id<C>(db: &C, id: i32) -> Result<Option<tag::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Tag::find_by_id(id).one(db).await
    }

    pub async fn find_tag_by_name<C>(db: &C, name: &str) -> Result<Option<tag::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Tag::find()
            .filter(tag::Column::Name.eq(name))
            .one(db)
            .await
    }

    /// Look a join row up by its composite primary key.
    pub async fn find_articles_tag<C>(
        db: &C,
        article_id: i32,
        tag_id: i32,
    ) -> Result<Option<articles_tag::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        ArticlesTag::find_by_id((article_id, tag_id)).one(db).await
    }

    /// Tags of an article. Both associations are joined, so a join row
    /// whose article is gone yields nothing.
    pub async fn tags_for_article<C>(db: &C, article_id: i32) -> Result<Vec<tag::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        let [articles, tags] = articles_tag::associations();

        Tag::find()
            .join_rev(tags.join_type, tags.def())
            .join(articles.join_type, articles.def())
            .filter(articles_tag::Column::ArticleId.eq(article_id))
            .order_by_asc(tag::Column::Id)
            .all(db)
            .await
    }

    /// Articles carrying a tag. Both associations are joined, so a join row
    /// whose tag is gone yields nothing.
    pub async fn articles_for_tag<C>(db: &C, tag_id: i32) -> Result<Vec<article::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        let [articles, tags] = articles_tag::associations();

        Article::find()
            .join_rev(articles.join_type, articles.def())
            .join(tags.join_type, tags.def())
            .filter(articles_tag::Column::TagId.eq(tag_id))
            .order_by_asc(article::Column::Id)
            .all(db)
            .await
    }

    /// Every join row whose parents both resolve, ordered by primary key.
    pub async fn tagged_articles<C>(db: &C) -> Result<Vec<TaggedArticle>, DbErr>
    where
        C: ConnectionTrait,
    {
        let [articles, tags] = articles_tag::associations();

        ArticlesTag::find()
            .select_only()
            .column(articles_tag::Column::ArticleId)
            .column(articles_tag::Column::TagId)
            .column_as(article::Column::Title, "title")
            .column_as(tag::Column::Name, "tag_name")
            .join(articles.join_type, articles.def())
            .join(tags.join_type, tags.def())
            .order_by_asc(articles_tag::Column::ArticleId)
            .order_by_asc(articles_tag::Column::TagId)
            .into_model::<TaggedArticle>()
            .all(db)
            .await
    }

    /// Primary key and display value of every join row.
    pub async fn list_articles_tags<C>(db: &C) -> Result<Vec<((i32, i32), String)>, DbErr>
    where
        C: ConnectionTrait,
    {
        let rows = ArticlesTag::find()
            .order_by_asc(articles_tag::Column::ArticleId)
            .order_by_asc(articles_tag::Column::TagId)
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| ((row.article_id, row.tag_id), row.to_string()))
            .collect())
    }
}
