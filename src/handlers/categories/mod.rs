mod list;
mod questions;

pub use list::list_categories;
pub use questions::list_category_questions;
