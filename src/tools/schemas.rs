//! Schema listing and detail handlers.

use crate::search::{SearchIndex, schema_detail, search_schemas};
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListSchemasRequest {
    /// Search query over schema names and property names; omit to list all
    pub query: Option<String>,
    /// Maximum number of results to return (default: 20, max: 100)
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SchemaDetailRequest {
    /// Exact schema name
    pub name: String,
}

/// List or search schema definitions.
pub fn handle_list_schemas(
    index: &SearchIndex,
    request: ListSchemasRequest,
) -> Result<String, String> {
    let hits = search_schemas(index, request.query.as_deref(), request.limit.unwrap_or(0));
    if hits.is_empty() {
        return Ok("No schemas found matching the search criteria.".to_string());
    }
    serde_json::to_string_pretty(&hits).map_err(|e| format!("Failed to serialize results: {e}"))
}

/// Resolve one schema definition by exact name.
pub fn handle_schema_detail(
    index: &SearchIndex,
    request: SchemaDetailRequest,
) -> Result<String, String> {
    let schema = schema_detail(index, &request.name).map_err(|e| e.to_string())?;
    serde_json::to_string_pretty(schema).map_err(|e| format!("Failed to serialize schema: {e}"))
}
