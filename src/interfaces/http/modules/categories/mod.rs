//! `/api/categories` resource

pub mod dto;
pub mod handlers;

pub use dto::{CategoryRequest, CategoryResponse};
pub use handlers::*;
