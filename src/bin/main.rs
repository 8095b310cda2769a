use articles_tags::{Cli, connect, handle_error, init_logging, run_command};
use clap::Parser;
use dotenvy::dotenv;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(url) = cli.database_url else {
        handle_error("Environment variable 'DATABASE_URL' not set");
        return;
    };

    let db = match connect(url, cli.database_schema, cli.verbose).await {
        Ok(db) => db,
        Err(err) => {
            handle_error(err);
            return;
        }
    };

    match run_command(&db, cli.command, cli.json).await {
        Ok(output) => print!("{output}"),
        Err(err) => handle_error(err),
    }
}
