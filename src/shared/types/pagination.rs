//! Paging primitives shared by the gateway, services and HTTP layer.
//!
//! - [`PageRequest`]: zero-based page coordinates handed to a paged scan
//! - [`Page`]: what a paged scan returns (slice + total element count)
//! - [`PaginationResponse`]: the read-only projection returned to clients

use serde::Serialize;
use utoipa::ToSchema;

use super::errors::DomainError;

/// Zero-based page coordinates for a paged scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: u64,
    pub page_size: u64,
}

impl PageRequest {
    /// Build a request, rejecting an empty page size.
    pub fn new(page_number: u64, page_size: u64) -> Result<Self, DomainError> {
        if page_size == 0 {
            return Err(DomainError::Validation(
                "page size must be greater than zero".into(),
            ));
        }
        Ok(Self {
            page_number,
            page_size,
        })
    }

    /// Same as [`PageRequest::new`], but a size above `max_page_size` is
    /// lowered to it rather than rejected.
    pub fn capped(
        page_number: u64,
        page_size: u64,
        max_page_size: u64,
    ) -> Result<Self, DomainError> {
        Self::new(page_number, page_size.min(max_page_size))
    }

    /// Number of rows to skip before this page starts.
    pub fn offset(&self) -> u64 {
        self.page_number.saturating_mul(self.page_size)
    }
}

/// One page of a paged scan, as produced by a repository.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub request: PageRequest,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            request,
            total_elements,
        }
    }
}

/// Paginated response wrapper
///
/// `totalPages = ceil(totalElements / pageSize)`, `hasPreviousPage = pageNumber > 0`,
/// `hasNextPage = pageNumber < totalPages - 1`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResponse<T> {
    /// Items on the requested page, in store order
    pub content: Vec<T>,
    /// Requested page (0-based)
    pub page_number: u64,
    /// Requested page size
    pub page_size: u64,
    /// Number of items across all pages
    pub total_elements: u64,
    pub total_pages: u64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl<T> PaginationResponse<T> {
    /// Project a content slice and paging coordinates into a response.
    ///
    /// `page_size` must be non-zero; callers validate it through
    /// [`PageRequest::new`]. A page past the end is not an error: it yields
    /// whatever (empty) content was passed in and `has_next_page = false`.
    pub fn paginate(
        content: Vec<T>,
        page_number: u64,
        page_size: u64,
        total_elements: u64,
    ) -> Self {
        debug_assert!(page_size > 0, "page size must be validated by the caller");

        let total_pages = total_elements.div_ceil(page_size);

        Self {
            content,
            page_number,
            page_size,
            total_elements,
            total_pages,
            has_previous_page: page_number > 0,
            // pageNumber < totalPages - 1, without underflow when totalPages = 0
            has_next_page: page_number.saturating_add(1) < total_pages,
        }
    }

    /// Convert the content items, keeping the page metadata.
    pub fn map<U, F>(self, f: F) -> PaginationResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginationResponse {
            content: self.content.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            has_previous_page: self.has_previous_page,
            has_next_page: self.has_next_page,
        }
    }
}

impl<T> From<Page<T>> for PaginationResponse<T> {
    fn from(page: Page<T>) -> Self {
        Self::paginate(
            page.content,
            page.request.page_number,
            page.request.page_size,
            page.total_elements,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_of_three_pages() {
        let content: Vec<u32> = (0..10).collect();
        let page = PaginationResponse::paginate(content, 0, 10, 25);

        assert_eq!(page.total_pages, 3);
        assert!(!page.has_previous_page);
        assert!(page.has_next_page);
        assert_eq!(page.content.len(), 10);
    }

    #[test]
    fn last_partial_page() {
        let content: Vec<u32> = (20..25).collect();
        let page = PaginationResponse::paginate(content, 2, 10, 25);

        assert_eq!(page.total_pages, 3);
        assert!(page.content.len() <= 5);
        assert!(page.has_previous_page);
        assert!(!page.has_next_page);
    }

    #[test]
    fn empty_result_set() {
        let page = PaginationResponse::<u32>::paginate(Vec::new(), 0, 10, 0);

        assert_eq!(page.total_pages, 0);
        assert!(page.content.is_empty());
        assert!(!page.has_previous_page);
        assert!(!page.has_next_page);
    }

    #[test]
    fn page_past_the_end_keeps_previous_flag() {
        let page = PaginationResponse::<u32>::paginate(Vec::new(), 7, 10, 25);

        assert_eq!(page.total_pages, 3);
        assert!(page.content.is_empty());
        assert!(page.has_previous_page);
        assert!(!page.has_next_page);
    }

    #[test]
    fn total_pages_is_ceiling_division() {
        for page_size in 1..=12u64 {
            for total in 0..=60u64 {
                let page = PaginationResponse::<u8>::paginate(Vec::new(), 0, page_size, total);
                let expected = ((total as f64) / (page_size as f64)).ceil() as u64;
                assert_eq!(page.total_pages, expected, "total={total} size={page_size}");
            }
        }
    }

    #[test]
    fn navigation_flags_follow_page_number() {
        let total_pages = 4i64;
        for page_number in 0..8u64 {
            let page = PaginationResponse::<u8>::paginate(Vec::new(), page_number, 5, 20);
            assert_eq!(page.has_previous_page, page_number > 0);
            assert_eq!(page.has_next_page, (page_number as i64) < total_pages - 1);
        }
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let page = PaginationResponse::paginate(vec!["a"], 1, 1, 3);
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["pageNumber"], 1);
        assert_eq!(json["pageSize"], 1);
        assert_eq!(json["totalElements"], 3);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["hasPreviousPage"], true);
        assert_eq!(json["hasNextPage"], true);
        assert_eq!(json["content"][0], "a");
    }

    #[test]
    fn from_page_and_map_keep_metadata() {
        let request = PageRequest::new(1, 2).unwrap();
        let page = Page::new(vec![3, 4], request, 5);

        let response = PaginationResponse::from(page).map(|n| n * 10);

        assert_eq!(response.content, vec![30, 40]);
        assert_eq!(response.page_number, 1);
        assert_eq!(response.total_pages, 3);
        assert!(response.has_next_page);
    }

    #[test]
    fn page_request_rejects_zero_and_caps_oversized_pages() {
        assert!(matches!(
            PageRequest::new(0, 0),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            PageRequest::capped(0, 0, 100),
            Err(DomainError::Validation(_))
        ));
        assert_eq!(PageRequest::capped(0, 101, 100).unwrap().page_size, 100);
        assert_eq!(PageRequest::capped(3, 100, 100).unwrap().offset(), 300);
    }

    #[test]
    fn offset_saturates_instead_of_overflowing() {
        let request = PageRequest::new(u64::MAX, 10).unwrap();
        assert_eq!(request.offset(), u64::MAX);
    }
}
