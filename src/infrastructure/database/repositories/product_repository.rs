//! SeaORM implementation of ProductRepository

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
};

use crate::domain::{DomainError, DomainResult, Product, ProductInput, ProductRepository};
use crate::infrastructure::database::entities::product;
use crate::shared::{Page, PageRequest};

fn entity_to_domain(p: product::Model) -> Product {
    Product {
        id: p.id,
        name: p.name,
        category_id: p.category_id,
        created_at: p.created_at,
        updated_at: p.updated_at,
    }
}

pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn insert(&self, input: ProductInput) -> DomainResult<Product> {
        let now = Utc::now();
        let model = product::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            category_id: Set(input.category_id),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model.insert(&self.db).await?;
        info!("Product saved: {} ({})", result.name, result.id);
        Ok(entity_to_domain(result))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Product>> {
        let model = product::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(entity_to_domain))
    }

    async fn exists_by_id(&self, id: i32) -> DomainResult<bool> {
        let count = product::Entity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn save(&self, p: Product) -> DomainResult<Product> {
        let exists = self.exists_by_id(p.id).await?;

        let model = product::ActiveModel {
            id: Set(p.id),
            name: Set(p.name),
            category_id: Set(p.category_id),
            created_at: Set(p.created_at),
            updated_at: Set(p.updated_at),
        };

        let result = if exists {
            model.update(&self.db).await?
        } else {
            model.insert(&self.db).await?
        };
        Ok(entity_to_domain(result))
    }

    async fn delete_by_id(&self, id: i32) -> DomainResult<()> {
        let result = product::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Product", id));
        }
        info!("Product {} deleted", id);
        Ok(())
    }

    async fn find_page(&self, request: PageRequest) -> DomainResult<Page<Product>> {
        let query = product::Entity::find().order_by_asc(product::Column::Id);

        let total = query.clone().count(&self.db).await?;
        // Past the end: the offset may not even fit the driver's signed bind type.
        if request.offset() >= total {
            return Ok(Page::new(Vec::new(), request, total));
        }

        let models = query
            .offset(request.offset())
            .limit(request.page_size)
            .all(&self.db)
            .await?;

        let content = models.into_iter().map(entity_to_domain).collect();
        Ok(Page::new(content, request, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CategoryInput, CategoryRepository};
    use crate::infrastructure::database::connect_in_memory;
    use crate::infrastructure::database::repositories::SeaOrmCategoryRepository;

    #[tokio::test]
    async fn insert_and_find_with_category() {
        let db = connect_in_memory().await;
        let categories = SeaOrmCategoryRepository::new(db.clone());
        let products = SeaOrmProductRepository::new(db);

        let category = categories
            .insert(CategoryInput {
                name: "Tools".into(),
            })
            .await
            .unwrap();
        let created = products
            .insert(ProductInput {
                name: "Hammer".into(),
                category_id: Some(category.id),
            })
            .await
            .unwrap();

        let stored = products.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Hammer");
        assert_eq!(stored.category_id, Some(category.id));
    }

    #[tokio::test]
    async fn save_clears_category_reference() {
        let db = connect_in_memory().await;
        let categories = SeaOrmCategoryRepository::new(db.clone());
        let products = SeaOrmProductRepository::new(db);

        let category = categories
            .insert(CategoryInput {
                name: "Tools".into(),
            })
            .await
            .unwrap();
        let mut product = products
            .insert(ProductInput {
                name: "Hammer".into(),
                category_id: Some(category.id),
            })
            .await
            .unwrap();

        product.category_id = None;
        products.save(product.clone()).await.unwrap();

        let stored = products.find_by_id(product.id).await.unwrap().unwrap();
        assert_eq!(stored.category_id, None);
    }

    #[tokio::test]
    async fn delete_then_find_returns_none() {
        let products = SeaOrmProductRepository::new(connect_in_memory().await);
        let product = products
            .insert(ProductInput {
                name: "Saw".into(),
                category_id: None,
            })
            .await
            .unwrap();

        products.delete_by_id(product.id).await.unwrap();

        assert!(products.find_by_id(product.id).await.unwrap().is_none());
        assert!(matches!(
            products.delete_by_id(product.id).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty() {
        let products = SeaOrmProductRepository::new(connect_in_memory().await);
        for name in ["a", "b", "c"] {
            products
                .insert(ProductInput {
                    name: name.into(),
                    category_id: None,
                })
                .await
                .unwrap();
        }

        let page = products
            .find_page(PageRequest::new(5, 2).unwrap())
            .await
            .unwrap();

        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 3);
    }

    #[tokio::test]
    async fn page_offset_beyond_i64_is_empty() {
        let products = SeaOrmProductRepository::new(connect_in_memory().await);
        products
            .insert(ProductInput {
                name: "Glue".into(),
                category_id: None,
            })
            .await
            .unwrap();

        let page = products
            .find_page(PageRequest::new(u64::MAX, 100).unwrap())
            .await
            .unwrap();

        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 1);
    }
}
