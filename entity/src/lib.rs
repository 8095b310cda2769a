pub mod prelude;

pub mod article;
pub mod articles_tag;
pub mod tag;
