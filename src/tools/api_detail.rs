//! Endpoint detail handler with content-filtering controls.

use crate::format::{BodyStyle, DescriptionStyle, DetailOptions, format_detail, resolve};
use crate::search::SearchIndex;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ApiDetailRequest {
    /// URL path template of the endpoint
    pub path: Option<String>,
    /// HTTP method of the endpoint
    pub method: Option<String>,
    /// Unique operation identifier; takes precedence over path and method
    pub operation_id: Option<String>,
    /// How much description text to return (default: summary_and_headers)
    pub description_style: Option<DescriptionStyle>,
    /// How much of the request body to return (default: none)
    pub request_body_style: Option<BodyStyle>,
    /// How much of the response bodies to return (default: none)
    pub response_body_style: Option<BodyStyle>,
    /// First description line for line_range style (1-indexed, inclusive)
    pub line_start: Option<usize>,
    /// Last description line for line_range style (1-indexed, inclusive)
    pub line_end: Option<usize>,
}

/// Resolve one endpoint and produce its filtered detail payload.
pub fn handle_api_detail(index: &SearchIndex, request: ApiDetailRequest) -> Result<String, String> {
    let has_operation_id = request
        .operation_id
        .as_deref()
        .is_some_and(|s| !s.trim().is_empty());
    if !has_operation_id && (request.path.is_none() || request.method.is_none()) {
        return Err(
            "Either 'operation_id' or both 'path' and 'method' must be provided.".to_string(),
        );
    }

    let record = resolve(
        index,
        request.path.as_deref(),
        request.method.as_deref(),
        request.operation_id.as_deref(),
    )
    .map_err(|e| e.to_string())?;

    let options = DetailOptions {
        description_style: request.description_style.unwrap_or_default(),
        request_body_style: request.request_body_style.unwrap_or_default(),
        response_body_style: request.response_body_style.unwrap_or_default(),
        line_start: request.line_start,
        line_end: request.line_end,
    };

    let detail = format_detail(record, &options);
    serde_json::to_string_pretty(&detail).map_err(|e| format!("Failed to serialize detail: {e}"))
}
