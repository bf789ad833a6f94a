pub mod calculations;
pub mod models;
pub mod parse;

pub use calculations::{compute, compute_payment};
pub use models::*;
