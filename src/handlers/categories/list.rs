use crate::{
    error,
    extractors::{Json, Page},
    handlers::models::{category_map, CategoryMap},
    utils::paginate,
    Result, StateTrait,
};
use axum::extract::State;
use entity::categories;
use sea_orm::EntityTrait;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Response {
    success: bool,
    categories: CategoryMap,
    count: usize,
}

pub async fn list_categories<S: StateTrait>(
    State(state): State<S>,
    page: Page,
) -> Result<Json<Response>> {
    let categories = categories::Entity::find_ordered().all(state.db()).await?;
    let count = categories.len();

    let categories = paginate(categories, page, count);

    if categories.is_empty() {
        return Err(error::NOT_FOUND);
    }

    Ok(Json(Response {
        success: true,
        categories: category_map(categories),
        count,
    }))
}
