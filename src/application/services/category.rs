//! Category use cases

use std::sync::Arc;

use tracing::info;

use crate::domain::{Category, CategoryInput, DomainError, DomainResult, RepositoryProvider};
use crate::shared::{Page, PageRequest};

/// Service for category operations.
///
/// Any read, update or delete addressed to a missing id fails with
/// [`DomainError::NotFound`].
pub struct CategoryService {
    repos: Arc<dyn RepositoryProvider>,
}

impl CategoryService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn create(&self, input: CategoryInput) -> DomainResult<Category> {
        let category = self.repos.categories().insert(input).await?;
        info!(category_id = category.id, "Category created");
        Ok(category)
    }

    pub async fn get_by_id(&self, id: i32) -> DomainResult<Category> {
        self.repos
            .categories()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Category", id))
    }

    /// Replace the category's name. The id always comes from the caller,
    /// never from the input.
    pub async fn update(&self, id: i32, input: CategoryInput) -> DomainResult<Category> {
        let mut existing = self.get_by_id(id).await?;
        existing.apply(input);

        let saved = self.repos.categories().save(existing).await?;
        info!(category_id = id, "Category updated");
        Ok(saved)
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        if !self.repos.categories().exists_by_id(id).await? {
            return Err(DomainError::not_found("Category", id));
        }
        self.repos.categories().delete_by_id(id).await?;
        info!(category_id = id, "Category deleted");
        Ok(())
    }

    pub async fn list_page(&self, request: PageRequest) -> DomainResult<Page<Category>> {
        self.repos.categories().find_page(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryStorage;

    fn service() -> CategoryService {
        CategoryService::new(Arc::new(InMemoryStorage::new()))
    }

    fn input(name: &str) -> CategoryInput {
        CategoryInput { name: name.into() }
    }

    #[tokio::test]
    async fn created_id_is_stable() {
        let service = service();

        let created = service.create(input("Books")).await.unwrap();
        let fetched = service.get_by_id(created.id).await.unwrap();

        assert!(created.id > 0);
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, "Books");
    }

    #[tokio::test]
    async fn update_missing_id_does_not_touch_store() {
        let service = service();
        service.create(input("Books")).await.unwrap();

        let err = service.update(42, input("Ghost")).await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound { .. }));
        let page = service
            .list_page(PageRequest::new(0, 10).unwrap())
            .await
            .unwrap();
        assert_eq!(page.total_elements, 1);
        assert_eq!(page.content[0].name, "Books");
    }

    #[tokio::test]
    async fn update_replaces_name_and_keeps_id() {
        let service = service();
        let created = service.create(input("Books")).await.unwrap();

        let updated = service.update(created.id, input("Comics")).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Comics");
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let service = service();
        let created = service.create(input("Books")).await.unwrap();

        service.delete(created.id).await.unwrap();

        assert!(matches!(
            service.get_by_id(created.id).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            service.delete(created.id).await,
            Err(DomainError::NotFound { .. })
        ));
    }
}
