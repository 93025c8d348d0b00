//! Domain layer: catalog entities and the repository ports they are stored through.

pub mod category;
pub mod product;
pub mod repositories;

pub use category::{Category, CategoryInput, CategoryRepository};
pub use product::{Product, ProductInput, ProductRepository};
pub use repositories::{DomainResult, RepositoryProvider};

pub use crate::shared::DomainError;
