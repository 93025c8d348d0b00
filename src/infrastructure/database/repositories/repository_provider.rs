//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::{CategoryRepository, ProductRepository, RepositoryProvider};

use super::category_repository::SeaOrmCategoryRepository;
use super::product_repository::SeaOrmProductRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let category = repos.categories().find_by_id(1).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    categories: SeaOrmCategoryRepository,
    products: SeaOrmProductRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            categories: SeaOrmCategoryRepository::new(db.clone()),
            products: SeaOrmProductRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn categories(&self) -> &dyn CategoryRepository {
        &self.categories
    }

    fn products(&self) -> &dyn ProductRepository {
        &self.products
    }
}
