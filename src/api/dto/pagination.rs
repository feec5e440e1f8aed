//! Pagination query parameters for statistics endpoints.

use serde::Deserialize;

/// Pagination query parameters.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: Option<u32>,

    #[serde(default)]
    pub page_size: Option<u32>,
}

/// A validated pagination window with defaults applied.
///
/// `page` and `page_size` are the resolved request values, `offset` and
/// `limit` the corresponding SQL window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub page_size: u32,
    pub offset: i64,
    pub limit: i64,
}

impl PaginationParams {
    /// Validates pagination parameters and resolves them into a [`PageWindow`].
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `page_size`: 25
    ///
    /// # Validation
    ///
    /// - Page must be > 0
    /// - Page size must be between 1 and 1000
    pub fn resolve(&self) -> Result<PageWindow, String> {
        let page = self.page.unwrap_or(1);
        let page_size = self.page_size.unwrap_or(25);

        if page == 0 {
            return Err("Page must be greater than 0".to_string());
        }

        if !(1..=1000).contains(&page_size) {
            return Err("Page size must be between 1 and 1000".to_string());
        }

        // Widen before multiplying; page * page_size can exceed u32::MAX.
        let offset = (i64::from(page) - 1) * i64::from(page_size);
        let limit = i64::from(page_size);

        Ok(PageWindow {
            page,
            page_size,
            offset,
            limit,
        })
    }
}

/// Pagination metadata included in paginated responses.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: i64,
    pub total_pages: u32,
}
