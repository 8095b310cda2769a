use articles_tags::{Cli, Commands, MigrateSubcommands, run_command};
use clap::Parser;
use pretty_assertions::assert_eq;
use sea_orm::{Database, DbConn};

async fn run(db: &DbConn, args: &[&str]) -> String {
    let cli = Cli::parse_from(std::iter::once("articles-tags").chain(args.iter().copied()));
    run_command(db, cli.command, cli.json)
        .await
        .expect("command failed")
}

#[tokio::test]
async fn tag_and_list_through_commands() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();

    assert_eq!(run(db, &["migrate"]).await, "");
    assert_eq!(
        run(db, &["add-article", "Hello", "--body", "World"]).await,
        "1\tHello\n"
    );
    assert_eq!(run(db, &["add-tag", "greeting"]).await, "1\tgreeting\n");
    assert_eq!(run(db, &["add-tag", "intro"]).await, "2\tintro\n");

    assert_eq!(run(db, &["tag", "1", "1"]).await, "1\t1\n");
    assert_eq!(run(db, &["tag", "1", "2"]).await, "1\t2\n");
    assert_eq!(
        run(db, &["tags-of", "1"]).await,
        "1\tgreeting\n2\tintro\n"
    );
    assert_eq!(run(db, &["articles-with", "2"]).await, "1\tHello\n");
    assert_eq!(
        run(db, &["list"]).await,
        "1\t1\tHello\tgreeting\n1\t2\tHello\tintro\n"
    );

    assert_eq!(run(db, &["untag", "1", "1"]).await, "");
    assert_eq!(run(db, &["set-tags", "1", "1"]).await, "1\tgreeting\n");
    assert_eq!(run(db, &["delete-tag", "1"]).await, "");
    assert_eq!(run(db, &["list"]).await, "");
}

#[tokio::test]
async fn json_output() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();

    run(db, &["migrate", "up"]).await;
    run(db, &["add-article", "Json"]).await;
    run(db, &["add-tag", "json"]).await;
    run(db, &["tag", "1", "1"]).await;

    let output = run(db, &["list", "--json"]).await;
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            { "article_id": 1, "tag_id": 1, "title": "Json", "tag_name": "json" }
        ])
    );
}

#[tokio::test]
async fn command_errors() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();

    run_command(
        db,
        Commands::Migrate {
            command: Some(MigrateSubcommands::Up { num: None }),
        },
        false,
    )
    .await
    .unwrap();

    let err = run_command(
        db,
        Commands::Tag {
            article_id: 1,
            tag_id: 1,
        },
        false,
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "Article 1 not found");

    let err = run_command(db, Commands::DeleteTag { id: 3 }, false)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Tag 3 not found");
}

#[tokio::test]
async fn migrate_status() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();

    let status = || Commands::Migrate {
        command: Some(MigrateSubcommands::Status),
    };

    assert_eq!(run_command(db, status(), false).await.unwrap(), "");
    assert_eq!(run(db, &["migrate", "up"]).await, "");
    assert_eq!(run_command(db, status(), false).await.unwrap(), "");
    assert_eq!(run(db, &["migrate", "status"]).await, "");
}
