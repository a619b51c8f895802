//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Use [`DataResponse`]
//! instead of ad-hoc `serde_json::json!({ "data": ... })` to get compile-time
//! type safety and consistent serialization. Paginated listings additionally
//! carry pagination metadata and the rendered page-control window.

use inkpot_core::pagination::{page_window, PageControl, PageMeta};
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Envelope for paginated collections.
///
/// `controls` is the pagination strip (first page, last page, current ± 1,
/// ellipses elsewhere), precomputed so every client renders the same window.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T: Serialize> {
    pub data: Vec<T>,
    pub meta: PageMeta,
    pub controls: Vec<PageControl>,
    /// The search query this page was filtered by, when one was given.
    /// Lets clients distinguish "no results for this query" from "no posts".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl<T: Serialize> PaginatedResponse<T> {
    /// Assemble a page of items with its metadata and control window.
    pub fn new(data: Vec<T>, meta: PageMeta, query: Option<String>) -> Self {
        let controls = page_window(meta.page, meta.total_pages);
        Self {
            data,
            meta,
            controls,
            query,
        }
    }
}
