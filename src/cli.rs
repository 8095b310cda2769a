use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(version, about = "Manage articles, tags and the articles_tags join table")]
pub struct Cli {
    #[clap(action, short = 'v', long, global = true, help = "Show debug messages")]
    pub verbose: bool,

    #[clap(action, long, global = true, help = "Print results as JSON")]
    pub json: bool,

    #[clap(
        value_parser,
        global = true,
        short = 'u',
        long,
        env = "DATABASE_URL",
        help = "Database URL"
    )]
    pub database_url: Option<String>,

    #[clap(
        value_parser,
        global = true,
        short = 's',
        long,
        env = "DATABASE_SCHEMA",
        long_help = "Database schema\n \
                    - For SQLite, this argument is ignored.\n \
                    - For PostgreSQL, this argument is optional with default value 'public'."
    )]
    pub database_schema: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, PartialEq, Eq, Debug)]
pub enum Commands {
    #[clap(about = "Apply or revert the schema migrations")]
    Migrate {
        #[clap(subcommand)]
        command: Option<MigrateSubcommands>,
    },
    #[clap(about = "Create an article")]
    AddArticle {
        #[clap(value_parser)]
        title: String,
        #[clap(value_parser, long, help = "Article body")]
        body: Option<String>,
    },
    #[clap(about = "Create a tag")]
    AddTag {
        #[clap(value_parser)]
        name: String,
    },
    #[clap(about = "Tag an article")]
    Tag {
        #[clap(value_parser)]
        article_id: i32,
        #[clap(value_parser)]
        tag_id: i32,
    },
    #[clap(about = "Remove a tag from an article")]
    Untag {
        #[clap(value_parser)]
        article_id: i32,
        #[clap(value_parser)]
        tag_id: i32,
    },
    #[clap(about = "Replace every tag of an article")]
    SetTags {
        #[clap(value_parser)]
        article_id: i32,
        #[clap(value_parser, num_args = 0.., help = "Tag ids; none clears the article")]
        tag_ids: Vec<i32>,
    },
    #[clap(about = "List the tags of an article")]
    TagsOf {
        #[clap(value_parser)]
        article_id: i32,
    },
    #[clap(about = "List the articles carrying a tag")]
    ArticlesWith {
        #[clap(value_parser)]
        tag_id: i32,
    },
    #[clap(about = "List every tagged article")]
    List,
    #[clap(about = "Delete an article and its taggings")]
    DeleteArticle {
        #[clap(value_parser)]
        id: i32,
    },
    #[clap(about = "Delete a tag and its taggings")]
    DeleteTag {
        #[clap(value_parser)]
        id: i32,
    },
}

#[derive(Subcommand, PartialEq, Eq, Debug)]
pub enum MigrateSubcommands {
    #[clap(about = "Apply pending migrations")]
    Up {
        #[clap(
            value_parser,
            short,
            long,
            help = "Number of pending migrations to apply"
        )]
        num: Option<u32>,
    },
    #[clap(about = "Rollback applied migrations")]
    Down {
        #[clap(
            value_parser,
            short,
            long,
            default_value = "1",
            help = "Number of applied migrations to be rolled back"
        )]
        num: u32,
    },
    #[clap(about = "Drop all tables from the database, then reapply all migrations")]
    Fresh,
    #[clap(about = "Check the status of all migrations")]
    Status,
}
