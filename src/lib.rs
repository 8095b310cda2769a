//! Articles, tags, and the `articles_tags` join table between them.
//!
//! The schema lives in the [`entity`] and [`migration`] crates. This crate
//! adds the operations that go through the join table's associations:
//! [`Query`] for reads and [`Mutation`] for writes.

pub mod cli;
pub mod commands;
mod error;
mod mutation;
mod query;

pub use cli::*;
pub use commands::*;
pub use error::*;
pub use mutation::*;
pub use query::*;

pub use entity;
pub use migration;
pub use sea_orm;
