use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, TransactionTrait};
use std::{env, sync::Arc};
use tracing::log::LevelFilter;

pub trait StateTrait: Send + Sync + Clone + 'static {
    type Db: ConnectionTrait + TransactionTrait + Clone;

    fn db(&self) -> &Self::Db;
}

pub struct State {
    database: DbConn,
}

impl State {
    pub async fn new() -> anyhow::Result<Arc<Self>> {
        Ok(Self::with_database(Self::connect_database().await?))
    }

    pub fn with_database(conn: DbConn) -> Arc<Self> {
        Arc::new(Self { database: conn })
    }

    async fn connect_database() -> anyhow::Result<DbConn> {
        info!("Trying to connect to database");

        let url = env::var("DATABASE_URL").inspect_err(|_| error!("DATABASE_URL is not set"))?;
        let mut opts = ConnectOptions::new(url);
        opts.sqlx_logging_level(LevelFilter::Debug);

        let db = Database::connect(opts)
            .await
            .inspect_err(|err| error!("failed to connect to database: {}", err))?;

        info!("Connected to database");

        Ok(db)
    }
}

impl StateTrait for Arc<State> {
    type Db = DbConn;

    fn db(&self) -> &Self::Db {
        &self.database
    }
}
