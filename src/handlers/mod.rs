mod categories;
mod models;
mod questions;
mod quizzes;
mod search;

use crate::{error, state::StateTrait};
use axum::{
    routing::{delete, get, post},
    Router,
};

/// Routes of the trivia api
///
/// GET    /api/categories
/// GET    /api/categories/:id/questions
/// GET    /api/questions
/// POST   /api/questions
/// DELETE /api/questions/:id
/// POST   /api/search
/// POST   /api/quizzes
pub fn routes<S: StateTrait>() -> Router<S> {
    let api = Router::new()
        .route("/categories", get(categories::list_categories::<S>))
        .route(
            "/categories/:id/questions",
            get(categories::list_category_questions::<S>),
        )
        .route(
            "/questions",
            get(questions::list_questions::<S>).post(questions::create_question::<S>),
        )
        .route("/questions/:id", delete(questions::delete_question::<S>))
        .route("/search", post(search::search_questions::<S>))
        .route("/quizzes", post(quizzes::next_question::<S>));

    Router::new()
        .nest("/api", api)
        .route("/liveness", get(|| async {}))
        .fallback(|| async { error::NOT_FOUND })
}
