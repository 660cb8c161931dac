mod json;
mod page;

pub use json::*;
pub use page::*;
