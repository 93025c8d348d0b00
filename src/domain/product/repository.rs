//! Product repository interface

use async_trait::async_trait;

use super::model::{Product, ProductInput};
use crate::domain::DomainResult;
use crate::shared::{Page, PageRequest};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, input: ProductInput) -> DomainResult<Product>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Product>>;
    async fn exists_by_id(&self, id: i32) -> DomainResult<bool>;
    async fn save(&self, product: Product) -> DomainResult<Product>;
    async fn delete_by_id(&self, id: i32) -> DomainResult<()>;
    async fn find_page(&self, request: PageRequest) -> DomainResult<Page<Product>>;
}
