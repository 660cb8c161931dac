use super::questions;
use sea_orm::{entity::prelude::*, QueryOrder};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "type")]
    pub kind: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Questions,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Questions => Entity::has_many(questions::Entity).into(),
        }
    }
}

impl Related<questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Questions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    /// All categories, ordered by their display label.
    #[inline]
    pub fn find_ordered() -> Select<Entity> {
        Self::find().order_by_asc(Column::Kind)
    }
}
