use std::collections::BTreeSet;

use ::entity::{
    article, articles_tag,
    prelude::{Article, ArticlesTag, Tag},
    tag,
};
use sea_orm::*;

use crate::{Error, Query, Result};

pub struct Mutation;

impl Mutation {
    pub async fn create_article(
        db: &DbConn,
        title: &str,
        body: Option<&str>,
    ) -> Result<article::Model> {
        let article = article::ActiveModel {
            title: Set(title.to_owned()),
            body: Set(body.map(ToOwned::to_owned)),
            ..Default::default()
        }
        .insert(db)
        .await?;

        tracing::debug!(id = article.id, "created article");
        Ok(article)
    }

    pub async fn create_tag(db: &DbConn, name: &str) -> Result<tag::Model> {
        let tag = tag::ActiveModel {
            name: Set(name.to_owned()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        tracing::debug!(id = tag.id, name = %tag.name, "created tag");
        Ok(tag)
    }

    /// Insert the `(article_id, tag_id)` pair after checking that both
    /// parents exist and the pair is new.
    pub async fn tag_article(
        db: &DbConn,
        article_id: i32,
        tag_id: i32,
    ) -> Result<articles_tag::Model> {
        let txn = db.begin().await?;

        ensure_article(&txn, article_id).await?;
        ensure_tag(&txn, tag_id).await?;
        if Query::find_articles_tag(&txn, article_id, tag_id)
            .await?
            .is_some()
        {
            return Err(Error::AlreadyTagged { article_id, tag_id });
        }

        let row = articles_tag::ActiveModel {
            article_id: Set(article_id),
            tag_id: Set(tag_id),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        tracing::debug!(article_id, tag_id, "tagged article");
        Ok(row)
    }

    pub async fn untag_article(db: &DbConn, article_id: i32, tag_id: i32) -> Result<DeleteResult> {
        let res = ArticlesTag::delete_by_id((article_id, tag_id))
            .exec(db)
            .await?;

        if res.rows_affected == 0 {
            return Err(Error::NotTagged { article_id, tag_id });
        }

        tracing::debug!(article_id, tag_id, "untagged article");
        Ok(res)
    }

    /// Make the tags of an article exactly `tag_ids`, returning the new set.
    /// Duplicate ids are ignored.
    pub async fn replace_tags(
        db: &DbConn,
        article_id: i32,
        tag_ids: &[i32],
    ) -> Result<Vec<tag::Model>> {
        let txn = db.begin().await?;

        ensure_article(&txn, article_id).await?;
        let wanted: BTreeSet<i32> = tag_ids.iter().copied().collect();
        for &tag_id in &wanted {
            ensure_tag(&txn, tag_id).await?;
        }

        let current: BTreeSet<i32> = ArticlesTag::find()
            .filter(articles_tag::Column::ArticleId.eq(article_id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|row| row.tag_id)
            .collect();

        let stale: Vec<i32> = current.difference(&wanted).copied().collect();
        if !stale.is_empty() {
            ArticlesTag::delete_many()
                .filter(articles_tag::Column::ArticleId.eq(article_id))
                .filter(articles_tag::Column::TagId.is_in(stale.iter().copied()))
                .exec(&txn)
                .await?;
        }

        let missing: Vec<i32> = wanted.difference(&current).copied().collect();
        for &tag_id in &missing {
            articles_tag::ActiveModel {
                article_id: Set(article_id),
                tag_id: Set(tag_id),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        tracing::debug!(
            article_id,
            removed = stale.len(),
            added = missing.len(),
            "replaced article tags"
        );
        Ok(Query::tags_for_article(db, article_id).await?)
    }

    /// Delete an article. Its join rows are removed by the cascading foreign key.
    pub async fn delete_article(db: &DbConn, id: i32) -> Result<DeleteResult> {
        let res = Article::delete_by_id(id).exec(db).await?;

        if res.rows_affected == 0 {
            return Err(Error::ArticleNotFound(id));
        }

        tracing::debug!(id, "deleted article");
        Ok(res)
    }

    /// Delete a tag. Its join rows are removed by the cascading foreign key.
    pub async fn delete_tag(db: &DbConn, id: i32) -> Result<DeleteResult> {
        let res = Tag::delete_by_id(id).exec(db).await?;

        if res.rows_affected == 0 {
            return Err(Error::TagNotFound(id));
        }

        tracing::debug!(id, "deleted tag");
        Ok(res)
    }
}

async fn ensure_article<C>(db: &C, id: i32) -> Result<()>
where
    C: ConnectionTrait,
{
    match Query::find_article_by_id(db, id).await? {
        Some(_) => Ok(()),
        None => Err(Error::ArticleNotFound(id)),
    }
}

async fn ensure_tag<C>(db: &C, id: i32) -> Result<()>
where
    C: ConnectionTrait,
{
    match Query::find_tag_by_id(db, id).await? {
        Some(_) => Ok(()),
        None => Err(Error::TagNotFound(id)),
    }
}
