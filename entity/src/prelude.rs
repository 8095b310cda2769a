pub use super::article::Entity as Article;
pub use super::articles_tag::Entity as ArticlesTag;
pub use super::tag::Entity as Tag;
