//! Category aggregate

pub mod model;
pub mod repository;

pub use model::{Category, CategoryInput};
pub use repository::CategoryRepository;
