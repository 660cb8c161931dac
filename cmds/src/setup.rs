use entity::categories;
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveValue::NotSet, ConnectOptions, Database, DbConn, EntityTrait, PaginatorTrait, Set,
    TransactionTrait,
};
use std::env;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

async fn seed_categories(db: &DbConn) -> anyhow::Result<()> {
    let txn = db.begin().await?;

    if categories::Entity::find().count(&txn).await? > 0 {
        info!("Categories already exist. Skipping seed...");
        return Ok(());
    }

    let models = DEFAULT_CATEGORIES.map(|kind| categories::ActiveModel {
        id: NotSet,
        kind: Set(kind.to_owned()),
    });

    categories::Entity::insert_many(models).exec(&txn).await?;
    txn.commit().await?;

    info!("Seeded {} categories", DEFAULT_CATEGORIES.len());

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let url = env::var("DATABASE_URL")?;
    let db = Database::connect(ConnectOptions::new(url)).await?;

    info!("Applying migrations");
    Migrator::up(&db, None).await?;

    seed_categories(&db).await
}
