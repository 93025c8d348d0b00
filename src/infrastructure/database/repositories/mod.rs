pub mod category_repository;
pub mod product_repository;
pub mod repository_provider;

pub use category_repository::SeaOrmCategoryRepository;
pub use product_repository::SeaOrmProductRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
