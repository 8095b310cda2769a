use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "article")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip_deserializing)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub body: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::articles_tag::Entity")]
    ArticlesTag,
}

impl Related<super::articles_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArticlesTag.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::articles_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::articles_tag::Relation::Article.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
