//! `/api/products` resource

pub mod dto;
pub mod handlers;

pub use dto::{ProductRequest, ProductResponse};
pub use handlers::*;
