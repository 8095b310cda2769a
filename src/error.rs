use sea_orm::DbErr;
use thiserror::Error;

/// An error from tagging operations
#[derive(Error, Debug)]
pub enum Error {
    /// Error from the database layer, including constraint violations
    #[error(transparent)]
    Db(#[from] DbErr),
    /// No article with this id
    #[error("Article {0} not found")]
    ArticleNotFound(i32),
    /// No tag with this id
    #[error("Tag {0} not found")]
    TagNotFound(i32),
    /// The pair already exists in `articles_tags`
    #[error("Article {article_id} is already tagged with tag {tag_id}")]
    AlreadyTagged { article_id: i32, tag_id: i32 },
    /// Command output could not be serialized
    #[error("Serializing output: {0}")]
    Json(#[from] serde_json::Error),
    /// Command output could not be formatted
    #[error("Formatting output: {0}")]
    Fmt(#[from] std::fmt::Error),
    /// The pair does not exist in `articles_tags`
    #[error("Article {article_id} is not tagged with tag {tag_id}")]
    NotTagged { article_id: i32, tag_id: i32 },
}

pub type Result<T> = std::result::Result<T, Error>;
