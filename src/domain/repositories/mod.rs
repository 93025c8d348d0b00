//! Repository access for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to the per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::category::CategoryRepository;
use super::product::ProductRepository;
use crate::shared::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let category = repos.categories().find_by_id(1).await?;
///     let page = repos.products().find_page(PageRequest::new(0, 10)?).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn categories(&self) -> &dyn CategoryRepository;
    fn products(&self) -> &dyn ProductRepository;
}
