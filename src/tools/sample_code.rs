//! Sample-code handler.

use crate::format::resolve;
use crate::sample::generate_sample;
use crate::search::SearchIndex;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SampleCodeRequest {
    /// URL path template of the endpoint
    pub path: Option<String>,
    /// HTTP method of the endpoint
    pub method: Option<String>,
    /// Unique operation identifier; takes precedence over path and method
    pub operation_id: Option<String>,
    /// Sample language: curl, python, javascript, java, or any language
    /// with a stored sample on the endpoint
    pub language: String,
}

/// Resolve one endpoint and produce sample code for it.
pub fn handle_sample_code(
    index: &SearchIndex,
    request: SampleCodeRequest,
) -> Result<String, String> {
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

    generate_sample(index, record, &request.language).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::load_spec_str;
    use assert2::check;

    fn index() -> SearchIndex {
        let doc = r#"{
            "paths": {
                "/api/auth/revoke": {
                    "post": { "operationId": "auth_revoke_api" }
                }
            }
        }"#;
        SearchIndex::build(load_spec_str(doc).unwrap()).unwrap()
    }

    #[test]
    fn resolves_by_path_and_method() {
        let request = SampleCodeRequest {
            path: Some("/api/auth/revoke".to_string()),
            method: Some("post".to_string()),
            operation_id: None,
            language: "curl".to_string(),
        };
        let output = handle_sample_code(&index(), request).unwrap();
        check!(output.contains("curl -X POST"));
        check!(output.contains("/api/auth/revoke"));
    }

    #[test]
    fn unsupported_language_is_reported() {
        let request = SampleCodeRequest {
            path: None,
            method: None,
            operation_id: Some("auth_revoke_api".to_string()),
            language: "brainfuck".to_string(),
        };
        let err = handle_sample_code(&index(), request).unwrap_err();
        check!(err.contains("brainfuck"));
        check!(err.contains("curl"));
    }
}
