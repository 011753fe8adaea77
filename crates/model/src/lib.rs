pub mod core;
pub mod error;
pub mod filter;

pub use error::ModelError;
pub use filter::{comparator::Comparator, expr::FilterExpr, filter::Filter};
