use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Pagination query parameters for list endpoints.
#[derive(Deserialize, IntoParams)]
pub struct PageQuery {
    /// 1-based page number, defaults to 1
    pub page: Option<u64>,
    /// Rows per page, defaults to 30
    pub page_size: Option<u64>,
}

static DEFAULT_PAGE_SIZE: u64 = 30;

impl PageQuery {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn page_size(&self) -> u64 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1)
    }
}

/// One page of a list endpoint's results.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct PageDto<T> {
    pub items: Vec<T>,
    /// Total row count across all pages
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
}
