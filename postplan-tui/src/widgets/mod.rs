//! Reusable widget components.

pub mod filter;
pub mod pagination;

pub use filter::{FilterBar, FilterEntry};
pub use pagination::PaginationBar;
