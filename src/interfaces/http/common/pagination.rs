//! `?page=&size=` query parameters

use serde::Deserialize;
use utoipa::IntoParams;

use crate::config::PaginationConfig;
use crate::shared::{DomainError, PageRequest};

/// Paging query for list endpoints
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number, starting at 0. Default: 0
    pub page: Option<u64>,
    /// Items per page. Default: 10; values above the configured maximum are capped
    pub size: Option<u64>,
}

impl PageQuery {
    /// Fill in defaults, reject `size = 0` and cap `size` at `max_page_size`.
    pub fn into_request(self, cfg: &PaginationConfig) -> Result<PageRequest, DomainError> {
        PageRequest::capped(
            self.page.unwrap_or(0),
            self.size.unwrap_or(cfg.default_page_size),
            cfg.max_page_size,
        )
    }
}
