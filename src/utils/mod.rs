mod pagination;
mod signal;

pub use pagination::*;
pub use signal::*;
