use crate::{
    error::{self, DatabaseError, Error},
    extractors::{Json, ValidatedJson},
    handlers::models::Question,
    Result, StateTrait,
};
use axum::extract::State;
use entity::{categories, questions};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use validator::Validate;

/// `category` and `difficulty` may also be sent as strings holding integers.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    #[validate(
        required(message = "required field"),
        length(min = 5, message = "min length is 5")
    )]
    question: Option<String>,
    #[validate(
        required(message = "required field"),
        length(min = 1, message = "min length is 1")
    )]
    answer: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[validate(required(message = "required field"))]
    category: Option<i32>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[validate(
        required(message = "required field"),
        range(min = 1, message = "min value is 1")
    )]
    difficulty: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct Response {
    success: bool,
    data: Question,
}

fn no_such_category() -> Error {
    Error::unprocessable(json!({ "category": ["no such category"] }))
}

pub async fn create_question<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<Response>> {
    let Request {
        question: Some(question),
        answer: Some(answer),
        category: Some(category),
        difficulty: Some(difficulty),
    } = request
    else {
        return Err(error::UNPROCESSABLE);
    };

    let txn = state.db().begin().await?;

    if categories::Entity::find_by_id(category)
        .one(&txn)
        .await?
        .is_none()
    {
        return Err(no_such_category());
    }

    let res = questions::ActiveModel {
        id: NotSet,
        question: Set(question),
        answer: Set(answer),
        category: Set(category),
        difficulty: Set(difficulty),
    }
    .insert(&txn)
    .await;

    let question = match res {
        Err(err) if err.foreign_key_violation() => return Err(no_such_category()),
        r => r?,
    };

    txn.commit().await?;

    info!("created question {}", question.id);

    Ok(Json(Response {
        success: true,
        data: question.into(),
    }))
}
