//! Category repository interface

use async_trait::async_trait;

use super::model::{Category, CategoryInput};
use crate::domain::DomainResult;
use crate::shared::{Page, PageRequest};

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Store a new category; the store assigns the identity.
    async fn insert(&self, input: CategoryInput) -> DomainResult<Category>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Category>>;
    async fn exists_by_id(&self, id: i32) -> DomainResult<bool>;
    /// Upsert keyed by `category.id`.
    async fn save(&self, category: Category) -> DomainResult<Category>;
    /// Remove the category and detach products that referenced it.
    async fn delete_by_id(&self, id: i32) -> DomainResult<()>;
    /// Paged scan in ascending identity order.
    async fn find_page(&self, request: PageRequest) -> DomainResult<Page<Category>>;
}
