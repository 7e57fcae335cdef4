//! Common types shared across the crate.

mod sort_order;
mod value;

pub use sort_order::SortOrder;
pub use value::Value;
