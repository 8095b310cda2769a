pub mod common;

use articles_tags::{
    Error, Mutation, Query,
    entity::{articles_tag, prelude::ArticlesTag},
};
use common::TestContext;
use pretty_assertions::assert_eq;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

#[tokio::test]
async fn primary_key_rejects_duplicate_pair() {
    let ctx = TestContext::new().await;
    let db = &ctx.db_conn;

    let article = ctx.article("Once").await;
    let tag = ctx.tag("once").await;
    Mutation::tag_article(db, article.id, tag.id).await.unwrap();

    let duplicate = articles_tag::ActiveModel {
        article_id: Set(article.id),
        tag_id: Set(tag.id),
    };
    assert!(ArticlesTag::insert(duplicate).exec(db).await.is_err());

    assert!(matches!(
        Mutation::tag_article(db, article.id, tag.id).await,
        Err(Error::AlreadyTagged { article_id, tag_id })
            if article_id == article.id && tag_id == tag.id
    ));
    assert_eq!(ArticlesTag::find().all(db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn foreign_keys_reject_dangling_rows() {
    let ctx = TestContext::new().await;
    let db = &ctx.db_conn;

    let article = ctx.article("Real").await;
    let tag = ctx.tag("real").await;

    let missing_article = articles_tag::ActiveModel {
        article_id: Set(article.id + 100),
        tag_id: Set(tag.id),
    };
    assert!(missing_article.insert(db).await.is_err());

    let missing_tag = articles_tag::ActiveModel {
        article_id: Set(article.id),
        tag_id: Set(tag.id + 100),
    };
    assert!(missing_tag.insert(db).await.is_err());

    assert!(ArticlesTag::find().all(db).await.unwrap().is_empty());
}

#[tokio::test]
async fn tagging_requires_both_parents() {
    let ctx = TestContext::new().await;
    let db = &ctx.db_conn;

    let article = ctx.article("Parent").await;
    let tag = ctx.tag("parent").await;

    assert!(matches!(
        Mutation::tag_article(db, 404, tag.id).await,
        Err(Error::ArticleNotFound(404))
    ));
    assert!(matches!(
        Mutation::tag_article(db, article.id, 404).await,
        Err(Error::TagNotFound(404))
    ));
    assert!(Query::tags_for_article(db, article.id).await.unwrap().is_empty());

    // the connection is usable again after the rolled back attempts
    Mutation::tag_article(db, article.id, tag.id).await.unwrap();
}

#[tokio::test]
async fn untag() {
    let ctx = TestContext::new().await;
    let db = &ctx.db_conn;

    let article = ctx.article("Untag").await;
    let keep = ctx.tag("keep").await;
    let removed = ctx.tag("removed").await;
    Mutation::tag_article(db, article.id, keep.id).await.unwrap();
    Mutation::tag_article(db, article.id, removed.id).await.unwrap();

    let res = Mutation::untag_article(db, article.id, removed.id).await.unwrap();
    assert_eq!(res.rows_affected, 1);
    assert_eq!(
        Query::tags_for_article(db, article.id).await.unwrap(),
        vec![keep]
    );

    assert!(matches!(
        Mutation::untag_article(db, article.id, removed.id).await,
        Err(Error::NotTagged { .. })
    ));
    // untagging leaves both parents in place
    assert!(Query::find_tag_by_id(db, removed.id).await.unwrap().is_some());
    assert!(
        Query::find_article_by_id(db, article.id)
            .await
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn tag_names_are_unique() {
    let ctx = TestContext::new().await;
    let db = &ctx.db_conn;

    ctx.tag("same").await;
    assert!(matches!(
        Mutation::create_tag(db, "same").await,
        Err(Error::Db(_))
    ));
}
