//! In-memory storage implementation

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::domain::{
    Category, CategoryInput, CategoryRepository, DomainError, DomainResult, Product,
    ProductInput, ProductRepository, RepositoryProvider,
};
use crate::shared::{Page, PageRequest};

/// In-memory storage for development and testing.
///
/// Serves both repositories itself, so deleting a category can detach
/// its products the same way the SQL foreign key does.
pub struct InMemoryStorage {
    categories: DashMap<i32, Category>,
    products: DashMap<i32, Product>,
    category_counter: AtomicI32,
    product_counter: AtomicI32,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            categories: DashMap::new(),
            products: DashMap::new(),
            category_counter: AtomicI32::new(1),
            product_counter: AtomicI32::new(1),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

/// Sorted-by-id slice of `map` for `request`.
fn page_of<T: Clone>(map: &DashMap<i32, T>, request: PageRequest) -> Page<T> {
    let mut entries: Vec<(i32, T)> = map
        .iter()
        .map(|e| (*e.key(), e.value().clone()))
        .collect();
    entries.sort_by_key(|(id, _)| *id);

    let total = entries.len() as u64;
    let content = entries
        .into_iter()
        .skip(usize::try_from(request.offset()).unwrap_or(usize::MAX))
        .take(usize::try_from(request.page_size).unwrap_or(usize::MAX))
        .map(|(_, v)| v)
        .collect();

    Page::new(content, request, total)
}

#[async_trait]
impl CategoryRepository for InMemoryStorage {
    async fn insert(&self, input: CategoryInput) -> DomainResult<Category> {
        let now = Utc::now();
        let category = Category {
            id: self.category_counter.fetch_add(1, Ordering::SeqCst),
            name: input.name,
            created_at: now,
            updated_at: now,
        };
        self.categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Category>> {
        Ok(self.categories.get(&id).map(|c| c.clone()))
    }

    async fn exists_by_id(&self, id: i32) -> DomainResult<bool> {
        Ok(self.categories.contains_key(&id))
    }

    async fn save(&self, category: Category) -> DomainResult<Category> {
        self.category_counter
            .fetch_max(category.id.saturating_add(1), Ordering::SeqCst);
        self.categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn delete_by_id(&self, id: i32) -> DomainResult<()> {
        if self.categories.remove(&id).is_none() {
            return Err(DomainError::not_found("Category", id));
        }
        for mut product in self.products.iter_mut() {
            if product.category_id == Some(id) {
                product.category_id = None;
            }
        }
        Ok(())
    }

    async fn find_page(&self, request: PageRequest) -> DomainResult<Page<Category>> {
        Ok(page_of(&self.categories, request))
    }
}

#[async_trait]
impl ProductRepository for InMemoryStorage {
    async fn insert(&self, input: ProductInput) -> DomainResult<Product> {
        let now = Utc::now();
        let product = Product {
            id: self.product_counter.fetch_add(1, Ordering::SeqCst),
            name: input.name,
            category_id: input.category_id,
            created_at: now,
            updated_at: now,
        };
        self.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Product>> {
        Ok(self.products.get(&id).map(|p| p.clone()))
    }

    async fn exists_by_id(&self, id: i32) -> DomainResult<bool> {
        Ok(self.products.contains_key(&id))
    }

    async fn save(&self, product: Product) -> DomainResult<Product> {
        self.product_counter
            .fetch_max(product.id.saturating_add(1), Ordering::SeqCst);
        self.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn delete_by_id(&self, id: i32) -> DomainResult<()> {
        match self.products.remove(&id) {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found("Product", id)),
        }
    }

    async fn find_page(&self, request: PageRequest) -> DomainResult<Page<Product>> {
        Ok(page_of(&self.products, request))
    }
}

impl RepositoryProvider for InMemoryStorage {
    fn categories(&self) -> &dyn CategoryRepository {
        self
    }

    fn products(&self) -> &dyn ProductRepository {
        self
    }
}
