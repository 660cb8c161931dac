use crate::{
    error,
    extractors::{Json, Page},
    handlers::models::{category_map, CategoryMap, Question},
    utils::{paginate, QUESTIONS_PER_PAGE},
    Result, StateTrait,
};
use axum::extract::State;
use entity::{categories, questions};
use sea_orm::{EntityTrait, TransactionTrait};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Response {
    success: bool,
    questions: Vec<Question>,
    categories: CategoryMap,
    #[serde(rename = "currentCategory")]
    current_category: Option<i32>,
    total_questions: usize,
}

pub async fn list_questions<S: StateTrait>(
    State(state): State<S>,
    page: Page,
) -> Result<Json<Response>> {
    let txn = state.db().begin().await?;

    let questions = questions::Entity::find_ordered()
        .into_model::<Question>()
        .all(&txn)
        .await?;
    let categories = categories::Entity::find_ordered().all(&txn).await?;

    txn.commit().await?;

    let total_questions = questions.len();
    let questions = paginate(questions, page, QUESTIONS_PER_PAGE);

    if questions.is_empty() {
        return Err(error::NOT_FOUND);
    }

    Ok(Json(Response {
        success: true,
        questions,
        categories: category_map(categories),
        current_category: None,
        total_questions,
    }))
}
