//! SeaORM implementation of CategoryRepository

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait,
};

use crate::domain::{Category, CategoryInput, CategoryRepository, DomainError, DomainResult};
use crate::infrastructure::database::entities::{category, product};
use crate::shared::{Page, PageRequest};

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(c: category::Model) -> Category {
    Category {
        id: c.id,
        name: c.name,
        created_at: c.created_at,
        updated_at: c.updated_at,
    }
}

// ── SeaOrmCategoryRepository ────────────────────────────────────

pub struct SeaOrmCategoryRepository {
    db: DatabaseConnection,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn insert(&self, input: CategoryInput) -> DomainResult<Category> {
        let now = Utc::now();
        let model = category::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model.insert(&self.db).await?;
        info!("Category saved: {} ({})", result.name, result.id);
        Ok(entity_to_domain(result))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Category>> {
        let model = category::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(entity_to_domain))
    }

    async fn exists_by_id(&self, id: i32) -> DomainResult<bool> {
        let count = category::Entity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn save(&self, c: Category) -> DomainResult<Category> {
        let exists = self.exists_by_id(c.id).await?;

        let model = category::ActiveModel {
            id: Set(c.id),
            name: Set(c.name),
            created_at: Set(c.created_at),
            updated_at: Set(c.updated_at),
        };

        let result = if exists {
            model.update(&self.db).await?
        } else {
            model.insert(&self.db).await?
        };
        Ok(entity_to_domain(result))
    }

    async fn delete_by_id(&self, id: i32) -> DomainResult<()> {
        let txn = self.db.begin().await?;

        let detached = product::Entity::update_many()
            .col_expr(product::Column::CategoryId, Expr::value(Option::<i32>::None))
            .filter(product::Column::CategoryId.eq(id))
            .exec(&txn)
            .await?;

        let result = category::Entity::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            // Dropping `txn` rolls the detach back.
            return Err(DomainError::not_found("Category", id));
        }

        txn.commit().await?;
        info!(
            "Category {} deleted, {} product(s) detached",
            id, detached.rows_affected
        );
        Ok(())
    }

    async fn find_page(&self, request: PageRequest) -> DomainResult<Page<Category>> {
        let query = category::Entity::find().order_by_asc(category::Column::Id);

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
