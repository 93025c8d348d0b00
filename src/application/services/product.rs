//! Product use cases

use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainError, DomainResult, Product, ProductInput, RepositoryProvider};
use crate::shared::{Page, PageRequest};

/// Service for product operations
pub struct ProductService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ProductService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// A referenced category must exist; dangling references are rejected
    /// before they reach the store.
    async fn check_category(&self, category_id: Option<i32>) -> DomainResult<()> {
        if let Some(category_id) = category_id {
            if !self.repos.categories().exists_by_id(category_id).await? {
                return Err(DomainError::Validation(format!(
                    "category {} does not exist",
                    category_id
                )));
            }
        }
        Ok(())
    }

    pub async fn create(&self, input: ProductInput) -> DomainResult<Product> {
        self.check_category(input.category_id).await?;

        let product = self.repos.products().insert(input).await?;
        info!(
            product_id = product.id,
            category_id = ?product.category_id,
            "Product created"
        );
        Ok(product)
    }

    pub async fn get_by_id(&self, id: i32) -> DomainResult<Product> {
        self.repos
            .products()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Product", id))
    }

    /// Replace name and category reference. The id always comes from the
    /// caller, never from the input.
    pub async fn update(&self, id: i32, input: ProductInput) -> DomainResult<Product> {
        let mut existing = self.get_by_id(id).await?;
        self.check_category(input.category_id).await?;
        existing.apply(input);

        let saved = self.repos.products().save(existing).await?;
        info!(product_id = id, "Product updated");
        Ok(saved)
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        if !self.repos.products().exists_by_id(id).await? {
            return Err(DomainError::not_found("Product", id));
        }
        self.repos.products().delete_by_id(id).await?;
        info!(product_id = id, "Product deleted");
        Ok(())
    }

    pub async fn list_page(&self, request: PageRequest) -> DomainResult<Page<Product>> {
        self.repos.products().find_page(request).await
    }
}
