use entity::{categories, questions};
use sea_orm::FromQueryResult;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize, FromQueryResult)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl From<questions::Model> for Question {
    fn from(model: questions::Model) -> Self {
        Self {
            id: model.id,
            question: model.question,
            answer: model.answer,
            category: model.category,
            difficulty: model.difficulty,
        }
    }
}

/// Categories keyed by id, serialized as `{"1": "Science", ...}`.
pub type CategoryMap = BTreeMap<i32, String>;

pub fn category_map(categories: Vec<categories::Model>) -> CategoryMap {
    categories
        .into_iter()
        .map(|category| (category.id, category.kind))
        .collect()
}

/// Path ids that are not integers address nothing.
pub fn parse_id(id: &str) -> Option<i32> {
    id.parse().ok()
}
