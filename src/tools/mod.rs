//! Tool handlers: request structs and execution logic for each MCP tool.

pub mod api_detail;
pub mod sample_code;
pub mod schemas;
pub mod search_apis;
