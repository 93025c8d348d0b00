//! Building blocks shared by all HTTP modules

pub mod error;
pub mod pagination;
pub mod validated_json;

pub use error::{ErrorResponse, HttpError};
pub use pagination::PageQuery;
pub use validated_json::ValidatedJson;
