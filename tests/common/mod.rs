use articles_tags::{
    Mutation,
    entity::{article, tag},
    migration::{Migrator, MigratorTrait},
};
use sea_orm::{Database, DatabaseConnection};

pub struct TestContext {
    pub db_conn: DatabaseConnection,
}

impl TestContext {
    pub async fn new() -> Self {
        let db_conn = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db_conn, None).await.unwrap();

        Self { db_conn }
    }

    pub async fn article(&self, title: &str) -> article::Model {
        Mutation::create_article(&self.db_conn, title, None)
            .await
            .expect("could not insert article")
    }

    pub async fn tag(&self, name: &str) -> tag::Model {
        Mutation::create_tag(&self.db_conn, name)
            .await
            .expect("could not insert tag")
    }
}
