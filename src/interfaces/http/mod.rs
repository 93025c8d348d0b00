//! HTTP REST API
//!
//! - `common`: error mapping, paging query and validated JSON extractor
//! - `modules`: one module per resource plus health, metrics and request id
//! - `router`: route table, shared state and OpenAPI document

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc, ApiState};
