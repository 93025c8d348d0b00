//! # Catalog Service
//!
//! REST service managing a product catalog: categories, products that
//! optionally belong to a category, and paged listings of both.
//!
//! ## Architecture
//!
//! - **domain**: entities and the repository ports they are stored through
//! - **application**: use-case services over the repositories
//! - **infrastructure**: SeaORM gateway, migrations and an in-memory store
//! - **interfaces**: axum HTTP API with Swagger documentation
//! - **server**: bootstrap and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use infrastructure::{init_database, DatabaseConfig, InMemoryStorage, SeaOrmRepositoryProvider};

pub use interfaces::{create_api_router, ApiState};
