//! Product aggregate
//!
//! A product optionally belongs to one category.

pub mod model;
pub mod repository;

pub use model::{Product, ProductInput};
pub use repository::ProductRepository;
