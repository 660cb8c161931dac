use super::request::RequestBuilder;
use entity::{categories, questions};
use migration::MigratorTrait;
use reqwest::Client;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ConnectOptions, Database, DbConn, EntityTrait, Set,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use trivia_backend::State;

async fn setup_database() -> DbConn {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    opts.max_connections(1).sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .expect("failed to connect to database");

    migration::Migrator::fresh(&db)
        .await
        .expect("failed to apply migrations");

    db
}

async fn setup_backend(db: DbConn) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let state = State::with_database(db);

    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        trivia_backend::run(listener, state).await.unwrap();
    });

    addr
}

/// Starts the server on an ephemeral port backed by a fresh in-memory database.
pub async fn setup() -> Env {
    let db = setup_database().await;
    let addr = setup_backend(db.clone()).await;

    Env {
        addr,
        client: Client::new(),
        db,
    }
}

#[derive(Clone)]
pub struct Env {
    pub addr: SocketAddr,
    pub client: Client,
    pub db: DbConn,
}

#[allow(unused)]
impl Env {
    fn get_url(&self, url: &str) -> String {
        format!("http://{}{}", self.addr, url)
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.get(self.get_url(url)))
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.post(self.get_url(url)))
    }

    pub fn patch(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.patch(self.get_url(url)))
    }

    pub fn put(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.put(self.get_url(url)))
    }

    pub fn delete(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.delete(self.get_url(url)))
    }

    pub fn options(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(
            self.client
                .request(reqwest::Method::OPTIONS, self.get_url(url)),
        )
    }
}

#[allow(unused)]
impl Env {
    pub async fn create_category(&self, kind: &str) -> i32 {
        categories::ActiveModel {
            id: NotSet,
            kind: Set(kind.to_owned()),
        }
        .insert(&self.db)
        .await
        .expect("failed to create category")
        .id
    }

    pub async fn create_question(&self, category: i32, question: &str, answer: &str) -> i32 {
        questions::ActiveModel {
            id: NotSet,
            question: Set(question.to_owned()),
            answer: Set(answer.to_owned()),
            category: Set(category),
            difficulty: Set(1),
        }
        .insert(&self.db)
        .await
        .expect("failed to create question")
        .id
    }

    /// Creates `count` questions named `Question number {n}` and returns their ids in order.
    pub async fn create_questions(&self, category: i32, count: usize) -> Vec<i32> {
        let mut ids = Vec::with_capacity(count);

        for n in 1..=count {
            ids.push(
                self.create_question(category, &format!("Question number {n}"), "Answer")
                    .await,
            );
        }

        ids
    }

    pub async fn find_question(&self, id: i32) -> Option<questions::Model> {
        questions::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .expect("failed to query question")
    }
}
