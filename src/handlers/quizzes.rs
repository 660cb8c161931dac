use crate::{extractors::Json, handlers::models::Question, Result, StateTrait};
use axum::extract::State;
use entity::questions;
use sea_orm::{
    sea_query::{Expr, Order},
    ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

/// Category id the client sends when playing across all categories.
const ALL_CATEGORIES: i32 = 0;

#[serde_as]
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    id: i32,
}

#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(default)]
    previous_questions: Option<Vec<i32>>,
    quiz_category: QuizCategory,
}

#[derive(Debug, Serialize)]
pub struct Response {
    success: bool,
    question: Option<Question>,
}

pub async fn next_question<S: StateTrait>(
    State(state): State<S>,
    Json(request): Json<Request>,
) -> Result<Json<Response>> {
    let category = request.quiz_category.id;
    let previous = request.previous_questions.unwrap_or_default();

    let mut query = questions::Entity::find();

    if category != ALL_CATEGORIES {
        query = query.filter(questions::Column::Category.eq(category));
    }

    if !previous.is_empty() {
        query = query.filter(questions::Column::Id.is_not_in(previous));
    }

    let question = query
        .order_by(Expr::cust("RANDOM()"), Order::Asc)
        .into_model::<Question>()
        .one(state.db())
        .await?;

    Ok(Json(Response {
        success: true,
        question,
    }))
}
