//! Error handling types and utilities.

/// A specialized Result type for openapi-mcp operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Errors produced by index construction and query evaluation.
///
/// Build-time integrity errors (`MalformedSpec`, `DuplicateOperationId`,
/// `DuplicatePathMethod`) abort index construction; no partial index is ever
/// published. Query-time errors are returned to the caller as values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The specification document could not be parsed as structured data.
    #[error("failed to parse specification document: {0}")]
    MalformedSpec(String),

    /// One operation entry is missing a mandatory field. Recovered during
    /// load: the entry is skipped and a warning recorded.
    #[error("operation entry '{method} {path}' is missing required field '{field}'; entry skipped")]
    SchemaViolation {
        path: String,
        method: String,
        field: &'static str,
    },

    /// Two operation entries declared the same operationId.
    #[error("duplicate operationId '{0}' in specification document")]
    DuplicateOperationId(String),

    /// Two operation entries declared the same path and method.
    #[error("duplicate operation entry for '{method} {path}' in specification document")]
    DuplicatePathMethod { path: String, method: String },

    /// A search request carried neither query text nor any filter.
    #[error(
        "empty search request: supply at least one of 'query', 'path_query', \
         'description_query', 'tag_filter' or 'method_filter'"
    )]
    InvalidQuery,

    /// A detail or sample-code lookup carried neither an operation id nor a
    /// complete (path, method) pair.
    #[error("endpoint lookup requires 'operation_id' or both 'path' and 'method'")]
    MissingIdentifier,

    /// An unrecognized search mode string.
    #[error("unknown search mode '{mode}'; valid modes: {}", valid.join(", "))]
    InvalidMode {
        mode: String,
        valid: Vec<&'static str>,
    },

    /// A detail or sample-code lookup resolved to nothing. Carries the
    /// nearest-matching identifiers so the caller can correct the request.
    #[error("'{identifier}' not found{}", format_suggestions(suggestions))]
    NotFound {
        identifier: String,
        suggestions: Vec<String>,
    },

    /// A sample-code request named a language with no registered generator
    /// and no stored sample.
    #[error("unsupported sample-code language '{language}'; supported: {}", supported.join(", "))]
    UnsupportedLanguage {
        language: String,
        supported: Vec<String>,
    },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(". Did you mean one of: {}?", suggestions.join(", "))
    }
}
