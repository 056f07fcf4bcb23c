//! Normalized in-memory records for a loaded API specification.
//!
//! One [`EndpointRecord`] per operation entry and one [`SchemaRecord`] per
//! named schema. Records are created once at index-build time and never
//! mutated; the whole set is replaced when the index is rebuilt.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// HTTP methods recognized in operation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ();

    /// Case-insensitive parse; anything outside the five supported verbs
    /// is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            "PATCH" => Ok(Self::Patch),
            _ => Err(()),
        }
    }
}

/// Where a parameter is carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    /// Anything else the document declares (cookie, body-adjacent extensions).
    Other,
}

impl ParameterLocation {
    pub(crate) fn parse(s: &str) -> Self {
        match s {
            "path" => Self::Path,
            "query" => Self::Query,
            "header" => Self::Header,
            _ => Self::Other,
        }
    }
}

/// One declared operation parameter, in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterRecord {
    pub name: String,
    pub location: ParameterLocation,
    pub required: bool,
    #[serde(rename = "type")]
    pub param_type: String,
    pub description: String,
}

/// A stored code sample attached to an operation entry
/// (`x-code-samples` in the source document).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeSample {
    pub lang: String,
    pub source: String,
}

/// One REST operation from the specification document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointRecord {
    /// URL template, e.g. `/api/{serviceId}/client/create`.
    pub path: String,
    pub method: HttpMethod,
    /// Unique across the corpus; enforced at index build.
    pub operation_id: String,
    pub tags: Vec<String>,
    pub summary: String,
    /// May be multi-kilobyte, multi-line markdown.
    pub description: String,
    pub parameters: Vec<ParameterRecord>,
    /// Raw request-body object as declared in the document.
    pub request_body: Option<Value>,
    /// Response objects keyed by status code, in document order.
    pub responses: serde_json::Map<String, Value>,
    pub deprecated: bool,
    /// Stored samples from the document, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<CodeSample>,
}

impl EndpointRecord {
    /// Languages with a stored sample, in declaration order.
    pub fn sample_languages(&self) -> Vec<String> {
        self.samples.iter().map(|s| s.lang.clone()).collect()
    }

    /// Stored sample source for a language, if present (case-insensitive).
    pub fn stored_sample(&self, language: &str) -> Option<&str> {
        self.samples
            .iter()
            .find(|s| s.lang.eq_ignore_ascii_case(language))
            .map(|s| s.source.as_str())
    }
}

/// One property of a named schema, in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub prop_type: String,
    pub description: String,
}

/// One named data-type definition from the specification document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaRecord {
    /// Unique key within the index.
    pub name: String,
    pub schema_type: String,
    pub title: String,
    pub description: String,
    pub properties: Vec<PropertyRecord>,
    /// Names of required properties.
    pub required: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

impl SchemaRecord {
    pub fn property(&self, name: &str) -> Option<&PropertyRecord> {
        self.properties.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("get", HttpMethod::Get)]
    #[case("POST", HttpMethod::Post)]
    #[case("Delete", HttpMethod::Delete)]
    fn method_parse_is_case_insensitive(#[case] input: &str, #[case] expected: HttpMethod) {
        check!(input.parse::<HttpMethod>() == Ok(expected));
    }

    #[test]
    fn method_parse_rejects_unknown_verbs() {
        check!("TRACE".parse::<HttpMethod>().is_err());
        check!("x-extension".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn stored_sample_lookup_is_case_insensitive() {
        let record = EndpointRecord {
            path: "/api/auth/token".to_string(),
            method: HttpMethod::Post,
            operation_id: "auth_token_api".to_string(),
            tags: vec![],
            summary: String::new(),
            description: String::new(),
            parameters: vec![],
            request_body: None,
            responses: serde_json::Map::new(),
            deprecated: false,
            samples: vec![CodeSample {
                lang: "Shell".to_string(),
                source: "curl ...".to_string(),
            }],
        };
        check!(record.stored_sample("shell") == Some("curl ..."));
        check!(record.stored_sample("python") == None);
    }
}
