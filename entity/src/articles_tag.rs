//! The `articles_tags` join table between [`article`](super::article) and [`tag`](super::tag).
//!
//! A row carries nothing but the two foreign keys, which together form the
//! primary key. Both associations are resolved with an inner join, so a row
//! only shows up in composed queries when both parents exist.

use std::fmt;

use sea_orm::JoinType;
use sea_orm::sea_query::ValueType;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Column used when a join row is listed or printed.
pub const DISPLAY_FIELD: Column = Column::ArticleId;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "articles_tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub article_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub tag_id: i32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::article::Entity",
        from = "Column::ArticleId",
        to = "super::article::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Article,
    #[sea_orm(
        belongs_to = "super::tag::Entity",
        from = "Column::TagId",
        to = "super::tag::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Tag,
}

impl Relation {
    /// How the association is joined when composing queries.
    pub fn join_type(&self) -> JoinType {
        match self {
            Self::Article | Self::Tag => JoinType::InnerJoin,
        }
    }
}

impl Related<super::article::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Article.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tag.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// A named belongs-to association of the join table.
#[derive(Copy, Clone, Debug)]
pub struct Association {
    pub name: &'static str,
    pub relation: Relation,
    pub foreign_key: Column,
    pub join_type: JoinType,
}

impl Association {
    /// Join definition pointing from the join table to the parent.
    pub fn def(&self) -> RelationDef {
        self.relation.def()
    }
}

/// Both associations, in declaration order.
pub fn associations() -> [Association; 2] {
    [
        Association {
            name: "Articles",
            relation: Relation::Article,
            foreign_key: Column::ArticleId,
            join_type: Relation::Article.join_type(),
        },
        Association {
            name: "Tags",
            relation: Relation::Tag,
            foreign_key: Column::TagId,
            join_type: Relation::Tag.join_type(),
        },
    ]
}

impl Model {
    /// Value of [`DISPLAY_FIELD`].
    pub fn display_value(&self) -> Value {
        self.get(DISPLAY_FIELD)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = <i32 as ValueType>::try_from(self.display_value()).map_err(|_| fmt::Error)?;
        write!(f, "{value}")
    }
}
