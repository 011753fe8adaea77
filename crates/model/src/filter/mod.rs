pub mod comparator;
pub mod expr;
#[allow(clippy::module_inception)]
pub mod filter;
