//! Endpoint search handler.

use crate::search::{SearchIndex, SearchMode, SearchOptions, search};
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchApisRequest {
    /// Free-text search query
    pub query: Option<String>,
    /// Substring filter on the URL path template
    pub path_query: Option<String>,
    /// Substring filter on summary or description text
    pub description_query: Option<String>,
    /// Substring filter on tags
    pub tag_filter: Option<String>,
    /// HTTP method filter (GET, POST, PUT, DELETE, PATCH)
    pub method_filter: Option<String>,
    /// Search mode: exact, partial, fuzzy or natural (default: natural)
    pub mode: Option<String>,
    /// Maximum number of results to return (default: 20, max: 100)
    pub limit: Option<usize>,
}

/// Execute an endpoint search against the current index snapshot.
pub fn handle_search_apis(
    index: &SearchIndex,
    request: SearchApisRequest,
) -> Result<String, String> {
    let mode = match request.mode.as_deref().filter(|m| !m.trim().is_empty()) {
        Some(mode) => SearchMode::parse(mode).map_err(|e| e.to_string())?,
        None => SearchMode::default(),
    };

    let options = SearchOptions {
        query: request.query,
        path_query: request.path_query,
        description_query: request.description_query,
        tag_filter: request.tag_filter,
        method_filter: request.method_filter,
        mode,
        limit: request.limit.unwrap_or(0),
    };

    let hits = search(index, &options).map_err(|e| e.to_string())?;
    if hits.is_empty() {
        return Ok("No APIs found matching the search criteria.".to_string());
    }

    serde_json::to_string_pretty(&hits).map_err(|e| format!("Failed to serialize results: {e}"))
}
