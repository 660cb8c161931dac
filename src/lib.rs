#[macro_use]
extern crate tracing;

pub mod error;
mod extractors;
mod handlers;
mod middlewares;
mod state;
mod utils;

use crate::{middlewares::middlewares, utils::SignalHandler};
use error::{Error, Result};
pub use state::*;
use tokio::net::TcpListener;
pub use utils::QUESTIONS_PER_PAGE;

pub async fn run<S: StateTrait>(listener: TcpListener, state: S) -> anyhow::Result<()> {
    info!("listening on {}", listener.local_addr()?);

    let app = middlewares(state, handlers::routes::<S>());

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(SignalHandler::new())
        .await?;

    Ok(())
}
