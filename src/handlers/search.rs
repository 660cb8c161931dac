use crate::{
    error,
    extractors::{Json, Page, ValidatedJson},
    handlers::models::Question,
    utils::{paginate, QUESTIONS_PER_PAGE},
    Result, StateTrait,
};
use axum::extract::State;
use entity::questions;
use sea_orm::{
    sea_query::{extension::postgres::PgExpr, Expr, LikeExpr},
    ConnectionTrait, DbBackend, EntityTrait, QueryFilter,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    #[serde(rename = "searchTerm", default)]
    #[validate(
        required(message = "required field"),
        length(min = 3, message = "min length is 3")
    )]
    search_term: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: Option<i32>,
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());

    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}

/// Questions containing `term`, ignoring case, ordered by id.
///
/// Postgres folds case with `ILIKE`. SQLite's `LOWER` and `LIKE` only fold ASCII, so there the
/// matching happens here with unicode lowercasing.
async fn find_matching<C: ConnectionTrait>(db: &C, term: &str) -> Result<Vec<Question>> {
    match db.get_database_backend() {
        DbBackend::Postgres => {
            let pattern = format!("%{}%", escape_like(term));

            let questions = questions::Entity::find_ordered()
                .filter(
                    Expr::col((questions::Entity, questions::Column::Question))
                        .ilike(LikeExpr::new(pattern).escape('\\')),
                )
                .into_model::<Question>()
                .all(db)
                .await?;

            Ok(questions)
        }
        DbBackend::Sqlite | DbBackend::MySql => {
            let needle = term.to_lowercase();

            let questions = questions::Entity::find_ordered()
                .into_model::<Question>()
                .all(db)
                .await?;

            Ok(questions
                .into_iter()
                .filter(|question| question.question.to_lowercase().contains(&needle))
                .collect())
        }
    }
}

pub async fn search_questions<S: StateTrait>(
    State(state): State<S>,
    page: Page,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<Response>> {
    let Some(term) = request.search_term else {
        return Err(error::UNPROCESSABLE);
    };

    let questions = find_matching(state.db(), &term).await?;

    let total_questions = questions.len();
    debug!("search for {:?} matched {} questions", term, total_questions);

    Ok(Json(Response {
        success: true,
        questions: paginate(questions, page, QUESTIONS_PER_PAGE),
        total_questions,
        current_category: None,
    }))
}
