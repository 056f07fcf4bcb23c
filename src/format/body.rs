//! Request/response body filtering.
//!
//! `schema_only` is the primary size-reduction lever: it retains the schema
//! type-reference name and drops nested property descriptions and examples.

use crate::search::index::schema_ref_name;
use rmcp::schemars;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// How much of a request or response body to return.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum BodyStyle {
    /// Complete nested schema as declared in the document.
    Full,
    /// Omit the field entirely.
    #[default]
    None,
    /// Schema type-reference name only.
    SchemaOnly,
}

/// Applies a body style to a raw body object.
pub(crate) fn filter_body(body: Option<&Value>, style: BodyStyle) -> Option<Value> {
    let body = body?;
    match style {
        BodyStyle::Full => Some(body.clone()),
        BodyStyle::None => None,
        BodyStyle::SchemaOnly => Some(schema_reference(body)),
    }
}

/// Applies a body style to the per-status-code response map.
pub(crate) fn filter_responses(
    responses: &serde_json::Map<String, Value>,
    style: BodyStyle,
) -> Option<Value> {
    if responses.is_empty() || style == BodyStyle::None {
        return None;
    }
    let filtered: serde_json::Map<String, Value> = responses
        .iter()
        .map(|(status, body)| {
            let value = match style {
                BodyStyle::Full => body.clone(),
                BodyStyle::SchemaOnly => schema_reference(body),
                BodyStyle::None => unreachable!(),
            };
            (status.clone(), value)
        })
        .collect();
    Some(Value::Object(filtered))
}

/// Reduces a body object to its schema reference. Falls back to the inline
/// schema type when the document declares no `$ref`.
fn schema_reference(body: &Value) -> Value {
    if let Some(name) = schema_ref_name(body) {
        return json!({ "schema": name });
    }
    let inline_type = inline_schema_type(body).unwrap_or("object");
    json!({ "type": inline_type })
}

fn inline_schema_type(body: &Value) -> Option<&str> {
    // content → <media type> → schema → type
    if let Some(content) = body.get("content").and_then(Value::as_object) {
        for media in content.values() {
            if let Some(t) = media
                .get("schema")
                .and_then(|s| s.get("type"))
                .and_then(Value::as_str)
            {
                return Some(t);
            }
        }
    }
    body.get("schema")
        .and_then(|s| s.get("type"))
        .and_then(Value::as_str)
        .or_else(|| body.get("type").and_then(Value::as_str))
}
