use crate::{
    error,
    extractors::{Json, Page},
    handlers::models::{parse_id, Question},
    utils::{paginate, QUESTIONS_PER_PAGE},
    Result, StateTrait,
};
use axum::extract::{Path, State};
use entity::questions;
use sea_orm::{EntityTrait, ModelTrait, TransactionTrait};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Response {
    success: bool,
    deleted: i32,
    data: Vec<Question>,
    count: usize,
}

pub async fn delete_question<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
    page: Page,
) -> Result<Json<Response>> {
    let Some(id) = parse_id(&id) else {
        return Err(error::NOT_FOUND);
    };

    let txn = state.db().begin().await?;

    let Some(question) = questions::Entity::find_by_id(id).one(&txn).await? else {
        return Err(error::NOT_FOUND);
    };

    question.delete(&txn).await?;

    txn.commit().await?;

    info!("deleted question {}", id);

    let remaining = questions::Entity::find_ordered()
        .into_model::<Question>()
        .all(state.db())
        .await?;
    let count = remaining.len();

    Ok(Json(Response {
        success: true,
        deleted: id,
        data: paginate(remaining, page, QUESTIONS_PER_PAGE),
        count,
    }))
}
