//! Pagination query parameter extractor.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::{Deserialize, Serialize};

use eventhub_core::config::PaginationConfig;
use eventhub_core::error::AppError;
use eventhub_core::types::pagination::PageRequest;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for paginated endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    pub page: Option<u64>,
    /// Items per page (default and maximum come from configuration).
    pub per_page: Option<u64>,
}

impl PaginationParams {
    /// Converts to a `PageRequest` within the configured bounds.
    pub fn into_page_request(self, config: &PaginationConfig) -> PageRequest {
        PageRequest::bounded(
            self.page.unwrap_or(1),
            self.per_page.unwrap_or(config.default_per_page),
            config.max_per_page,
        )
    }
}

/// Page request taken from the query string.
#[derive(Debug, Clone, Copy)]
pub struct Pagination(pub PageRequest);

impl FromRequestParts<AppState> for Pagination {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;
        Ok(Self(params.into_page_request(&state.config.pagination)))
    }
}
