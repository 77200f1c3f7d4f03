//! Response DTOs.

use serde::{Deserialize, Serialize};

use eventhub_core::types::pagination::PageResponse;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
    /// Response data.
    pub data: T,
    /// Pagination info for list responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
            meta: None,
        }
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// Creates a successful list response with pagination meta.
    pub fn paginated(message: impl Into<String>, page: PageResponse<T>) -> Self {
        let meta = PageMeta::from(&page);
        Self {
            success: true,
            message: message.into(),
            data: page.items,
            meta: Some(meta),
        }
    }
}

/// Pagination meta block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: u64,
    pub last_page: u64,
    pub per_page: u64,
    pub total: u64,
}

impl<T: Serialize> From<&PageResponse<T>> for PageMeta {
    fn from(page: &PageResponse<T>) -> Self {
        Self {
            current_page: page.page,
            last_page: page.total_pages,
            per_page: page.page_size,
            total: page.total_items,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "ok" or "degraded".
    pub status: String,
    /// Version.
    pub version: String,
    /// Store provider name.
    pub store: String,
    /// Whether the store answered its health check.
    pub store_healthy: bool,
}
