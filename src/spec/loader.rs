//! Parses a raw OpenAPI-style document into normalized records.
//!
//! The loader has no search logic: it walks `paths` and `components.schemas`
//! and produces one [`EndpointRecord`] per operation entry and one
//! [`SchemaRecord`] per named schema. A single malformed entry is skipped
//! with a recorded warning rather than failing the whole load; only an
//! unparsable document is fatal.

use crate::error::SearchError;
use crate::spec::model::{
    CodeSample, EndpointRecord, HttpMethod, ParameterLocation, ParameterRecord, PropertyRecord,
    SchemaRecord,
};
use serde_json::Value;
use std::path::Path;
use std::str::FromStr;

/// Loader output: normalized records plus per-entry warnings.
#[derive(Debug, Default)]
pub struct RawSpec {
    pub endpoints: Vec<EndpointRecord>,
    pub schemas: Vec<SchemaRecord>,
    /// Human-readable notes for entries that were skipped or trimmed.
    pub warnings: Vec<String>,
}

/// Parse a specification document from a string.
///
/// Fails with [`SearchError::MalformedSpec`] if the text is not valid JSON
/// or its top level is not an object.
pub fn load_spec_str(text: &str) -> Result<RawSpec, SearchError> {
    let doc: Value =
        serde_json::from_str(text).map_err(|e| SearchError::MalformedSpec(e.to_string()))?;

    let root = doc
        .as_object()
        .ok_or_else(|| SearchError::MalformedSpec("top-level value is not an object".to_string()))?;

    let mut spec = RawSpec::default();
    extract_endpoints(root, &mut spec);
    extract_schemas(root, &mut spec);

    tracing::info!(
        endpoints = spec.endpoints.len(),
        schemas = spec.schemas.len(),
        warnings = spec.warnings.len(),
        "Loaded specification document"
    );

    Ok(spec)
}

/// Read and parse a specification document from disk.
pub fn load_spec_file(path: &Path) -> crate::error::Result<RawSpec> {
    use anyhow::Context as _;

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read specification at {}", path.display()))?;
    Ok(load_spec_str(&text)?)
}

fn extract_endpoints(root: &serde_json::Map<String, Value>, spec: &mut RawSpec) {
    let Some(paths) = root.get("paths").and_then(Value::as_object) else {
        warn(spec, "document has no 'paths' section".to_string());
        return;
    };

    for (path, path_item) in paths {
        let Some(path_item) = path_item.as_object() else {
            warn(spec, format!("path item '{}' is not an object; skipped", path));
            continue;
        };

        // Path-level parameters apply to every operation under the template.
        let shared_params: Vec<ParameterRecord> = path_item
            .get("parameters")
            .map(|v| extract_parameters(v))
            .unwrap_or_default();

        for (method_key, operation) in path_item {
            if method_key.starts_with("x-") || method_key == "parameters" {
                continue;
            }
            let Some(operation) = operation.as_object() else {
                continue;
            };
            let Ok(method) = HttpMethod::from_str(method_key) else {
                warn(
                    spec,
                    format!("'{} {}' uses an unsupported method; skipped", method_key, path),
                );
                continue;
            };

            match extract_operation(path, method, operation, &shared_params) {
                Ok(record) => spec.endpoints.push(record),
                Err(e) => warn(spec, e.to_string()),
            }
        }
    }
}

fn extract_operation(
    path: &str,
    method: HttpMethod,
    operation: &serde_json::Map<String, Value>,
    shared_params: &[ParameterRecord],
) -> Result<EndpointRecord, SearchError> {
    let operation_id = operation
        .get("operationId")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| SearchError::SchemaViolation {
            path: path.to_string(),
            method: method.to_string(),
            field: "operationId",
        })?
        .to_string();

    let tags = operation
        .get("tags")
        .and_then(Value::as_array)
        .map(|a| {
            a.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    // Operation-level parameters first, then those shared by the path item.
    let mut parameters = operation
        .get("parameters")
        .map(|v| extract_parameters(v))
        .unwrap_or_default();
    parameters.extend_from_slice(shared_params);

    let samples = operation
        .get("x-code-samples")
        .and_then(Value::as_array)
        .map(|a| {
            a.iter()
                .filter_map(|s| {
                    let lang = s.get("lang")?.as_str()?;
                    let source = s.get("source")?.as_str()?;
                    (!lang.is_empty()).then(|| CodeSample {
                        lang: lang.to_string(),
                        source: source.to_string(),
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(EndpointRecord {
        path: path.to_string(),
        method,
        operation_id,
        tags,
        summary: str_field(operation, "summary"),
        description: str_field(operation, "description"),
        parameters,
        request_body: operation.get("requestBody").cloned(),
        responses: operation
            .get("responses")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default(),
        deprecated: operation
            .get("deprecated")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        samples,
    })
}

fn extract_parameters(value: &Value) -> Vec<ParameterRecord> {
    let Some(list) = value.as_array() else {
        return vec![];
    };

    list.iter()
        .filter_map(Value::as_object)
        .filter_map(|p| {
            let name = p.get("name")?.as_str()?;
            Some(ParameterRecord {
                name: name.to_string(),
                location: ParameterLocation::parse(
                    p.get("in").and_then(Value::as_str).unwrap_or(""),
                ),
                required: p.get("required").and_then(Value::as_bool).unwrap_or(false),
                param_type: p
                    .get("schema")
                    .and_then(|s| s.get("type"))
                    .and_then(Value::as_str)
                    .unwrap_or("string")
                    .to_string(),
                description: str_field(p, "description"),
            })
        })
        .collect()
}

fn extract_schemas(root: &serde_json::Map<String, Value>, spec: &mut RawSpec) {
    let Some(schemas) = root
        .get("components")
        .and_then(|c| c.get("schemas"))
        .and_then(Value::as_object)
    else {
        return;
    };

    for (name, def) in schemas {
        let Some(def) = def.as_object() else {
            warn(spec, format!("schema '{}' is not an object; skipped", name));
            continue;
        };

        let properties = def
            .get("properties")
            .and_then(Value::as_object)
            .map(|props| {
                props
                    .iter()
                    .map(|(prop_name, prop_def)| PropertyRecord {
                        name: prop_name.clone(),
                        prop_type: prop_def
                            .get("type")
                            .and_then(Value::as_str)
                            .unwrap_or("object")
                            .to_string(),
                        description: prop_def
                            .get("description")
                            .and_then(Value::as_str)
                            .unwrap_or("")
                            .to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let required = def
            .get("required")
            .and_then(Value::as_array)
            .map(|a| {
                a.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        spec.schemas.push(SchemaRecord {
            name: name.clone(),
            schema_type: def
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or("object")
                .to_string(),
            title: str_field(def, "title"),
            description: str_field(def, "description"),
            properties,
            required,
            example: def.get("example").cloned(),
        });
    }
}

fn str_field(obj: &serde_json::Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

fn warn(spec: &mut RawSpec, message: String) {
    tracing::warn!("{}", message);
    spec.warnings.push(message);
}
