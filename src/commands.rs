use std::fmt::{Display, Write};

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DbConn};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, prelude::*};

use crate::{Commands, MigrateSubcommands, Mutation, Query, Result};

/// Quiet mode still lets migration progress and status through.
fn log_filter(verbose: bool) -> &'static str {
    match verbose {
        true => "debug",
        false => "articles_tags=info,sea_orm_migration=info",
    }
}

pub fn init_logging(verbose: bool) {
    let filter_layer =
        EnvFilter::try_new(log_filter(verbose)).unwrap_or_else(|_| EnvFilter::new("info"));

    if verbose {
        let fmt_layer = tracing_subscriber::fmt::layer();
        let _ = tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .try_init();
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_level(false)
            .without_time();
        let _ = tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .try_init();
    }
}

pub async fn connect(url: String, schema: Option<String>, verbose: bool) -> Result<DbConn> {
    let mut options = ConnectOptions::new(url);
    options.sqlx_logging(verbose);
    if let Some(schema) = schema {
        options.set_schema_search_path(schema);
    }

    Ok(Database::connect(options).await?)
}

/// Execute one command and render what it produced, as text or as JSON.
pub async fn run_command(db: &DbConn, command: Commands, json: bool) -> Result<String> {
    let output = match command {
        Commands::Migrate { command } => {
            match command {
                Some(MigrateSubcommands::Up { num }) => Migrator::up(db, num).await?,
                Some(MigrateSubcommands::Down { num }) => Migrator::down(db, Some(num)).await?,
                Some(MigrateSubcommands::Fresh) => Migrator::fresh(db).await?,
                Some(MigrateSubcommands::Status) => Migrator::status(db).await?,
                None => Migrator::up(db, None).await?,
            }
            tracing::info!("migration finished");
            String::new()
        }
        Commands::AddArticle { title, body } => {
            let article = Mutation::create_article(db, &title, body.as_deref()).await?;
            tracing::info!(id = article.id, "article created");
            render(json, &article, |out| {
                writeln!(out, "{}\t{}", article.id, article.title)
            })?
        }
        Commands::AddTag { name } => {
            let tag = Mutation::create_tag(db, &name).await?;
            tracing::info!(id = tag.id, "tag created");
            render(json, &tag, |out| writeln!(out, "{}\t{}", tag.id, tag.name))?
        }
        Commands::Tag { article_id, tag_id } => {
            let row = Mutation::tag_article(db, article_id, tag_id).await?;
            tracing::info!(article_id, tag_id, "article tagged");
            render(json, &row, |out| {
                writeln!(out, "{}\t{}", row.article_id, row.tag_id)
            })?
        }
        Commands::Untag { article_id, tag_id } => {
            Mutation::untag_article(db, article_id, tag_id).await?;
            tracing::info!(article_id, tag_id, "article untagged");
            String::new()
        }
        Commands::SetTags {
            article_id,
            tag_ids,
        } => {
            let tags = Mutation::replace_tags(db, article_id, &tag_ids).await?;
            render_rows(json, &tags, |tag| (tag.id, tag.name.clone()))?
        }
        Commands::TagsOf { article_id } => {
            let tags = Query::tags_for_article(db, article_id).await?;
            render_rows(json, &tags, |tag| (tag.id, tag.name.clone()))?
        }
        Commands::ArticlesWith { tag_id } => {
            let articles = Query::articles_for_tag(db, tag_id).await?;
            render_rows(json, &articles, |article| {
                (article.id, article.title.clone())
            })?
        }
        Commands::List => {
            let rows = Query::tagged_articles(db).await?;
            render(json, &rows, |out| {
                for row in &rows {
                    writeln!(
                        out,
                        "{}\t{}\t{}\t{}",
                        row.article_id, row.tag_id, row.title, row.tag_name
                    )?;
                }
                Ok(())
            })?
        }
        Commands::DeleteArticle { id } => {
            Mutation::delete_article(db, id).await?;
            tracing::info!(id, "article deleted");
            String::new()
        }
        Commands::DeleteTag { id } => {
            Mutation::delete_tag(db, id).await?;
            tracing::info!(id, "tag deleted");
            String::new()
        }
    };

    Ok(output)
}

fn render<T, F>(json: bool, value: &T, text: F) -> Result<String>
where
    T: Serialize,
    F: FnOnce(&mut String) -> std::fmt::Result,
{
    let mut out = String::new();
    if json {
        out = serde_json::to_string_pretty(value)?;
        out.push('\n');
    } else {
        text(&mut out)?;
    }
    Ok(out)
}

fn render_rows<T, F>(json: bool, rows: &[T], columns: F) -> Result<String>
where
    T: Serialize,
    F: Fn(&T) -> (i32, String),
{
    render(json, &rows, |out| {
        for row in rows {
            let (id, label) = columns(row);
            writeln!(out, "{id}\t{label}")?;
        }
        Ok(())
    })
}

pub fn handle_error<E>(error: E)
where
    E: Display,
{
    eprintln!("{error}");
    ::std::process::exit(1);
}
