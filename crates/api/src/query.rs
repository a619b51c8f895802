//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for the public post listing (`?page=&q=`).
///
/// `page` is 1-based and clamped; `q` filters by case-insensitive substring
/// match over title and content.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub q: Option<String>,
}
