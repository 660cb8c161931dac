use crate::{
    error,
    extractors::{Json, Page},
    handlers::models::{parse_id, Question},
    utils::paginate,
    Result, StateTrait,
};
use axum::extract::{Path, State};
use entity::questions;
use sea_orm::EntityTrait;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: i32,
}

pub async fn list_category_questions<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
    page: Page,
) -> Result<Json<Response>> {
    let Some(id) = parse_id(&id) else {
        return Err(error::NOT_FOUND);
    };

    let questions = questions::Entity::find_in_category(id)
        .into_model::<Question>()
        .all(state.db())
        .await?;
    let total_questions = questions.len();

    let questions = paginate(questions, page, total_questions);

    if questions.is_empty() {
        return Err(error::NOT_FOUND);
    }

    Ok(Json(Response {
        success: true,
        questions,
        total_questions,
        current_category: id,
    }))
}
