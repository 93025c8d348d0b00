//! Application layer: use cases orchestrating the repositories

pub mod services;

pub use services::{CategoryService, ProductService};
