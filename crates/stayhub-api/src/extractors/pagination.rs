//! Pagination query parameters.

use serde::Deserialize;

use stayhub_core::types::pagination::PageRequest;

/// Query-string pagination parameters (`?page=2&page_size=10`).
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub page_size: Option<u64>,
}

impl PaginationParams {
    /// Convert into a clamped [`PageRequest`].
    pub fn into_page_request(self) -> PageRequest {
        let defaults = PageRequest::default();
        PageRequest::new(
            self.page.unwrap_or(defaults.page),
            self.page_size.unwrap_or(defaults.page_size),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let params = PaginationParams {
            page: None,
            page_size: None,
        };
        let page = params.into_page_request();
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, PageRequest::default().page_size);
    }

    #[test]
    fn test_explicit_values_kept() {
        let params = PaginationParams {
            page: Some(4),
            page_size: Some(10),
        };
        let page = params.into_page_request();
        assert_eq!(page.page, 4);
        assert_eq!(page.page_size, 10);
    }
}
