mod create;
mod delete;
mod list;

pub use create::create_question;
pub use delete::delete_question;
pub use list::list_questions;
