//! Query evaluation over one index snapshot.
//!
//! Each call is stateless: filters are applied as hard AND pre-filters,
//! surviving records are scored by the requested mode, and results are
//! deduplicated by `(path, method)` and sorted with a stable tie-break so
//! identical requests produce byte-identical output.

use crate::error::SearchError;
use crate::spec::model::{EndpointRecord, HttpMethod};
use ahash::AHashSet;
use serde::Serialize;
use std::str::FromStr;

use super::index::SearchIndex;
use super::scoring::{score, SearchMode};

/// Requests above this limit are clamped, not rejected.
pub const MAX_RESULT_LIMIT: usize = 100;

/// Default result count when the caller does not specify one.
pub const DEFAULT_RESULT_LIMIT: usize = 20;

/// Search-result descriptions are truncated to this many characters; the
/// detail endpoint serves the full text.
const RESULT_DESCRIPTION_CHARS: usize = 100;

/// One search request: free-text query, hard filters, mode and limit.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub query: Option<String>,
    /// Substring filter on the path template.
    pub path_query: Option<String>,
    /// Substring filter on summary or description.
    pub description_query: Option<String>,
    /// Substring filter on tags.
    pub tag_filter: Option<String>,
    /// HTTP method filter; values outside GET/POST/PUT/DELETE/PATCH match
    /// nothing.
    pub method_filter: Option<String>,
    pub mode: SearchMode,
    pub limit: usize,
}

impl SearchOptions {
    fn query_text(&self) -> Option<&str> {
        self.query.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }

    fn has_filter(&self) -> bool {
        [
            &self.path_query,
            &self.description_query,
            &self.tag_filter,
            &self.method_filter,
        ]
        .into_iter()
        .any(|f| f.as_deref().is_some_and(|s| !s.trim().is_empty()))
    }
}

/// One ranked search hit. Descriptions are truncated; `sample_languages`
/// advertises which stored code samples exist for the operation.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub path: String,
    pub method: HttpMethod,
    pub operation_id: String,
    pub summary: String,
    pub description: String,
    pub tags: Vec<String>,
    pub sample_languages: Vec<String>,
    pub score: f64,
}

/// Evaluates a search request against the index.
///
/// Returns `InvalidQuery` when neither query text nor any filter is present.
pub fn search(index: &SearchIndex, options: &SearchOptions) -> Result<Vec<SearchHit>, SearchError> {
    let query = options.query_text();
    if query.is_none() && !options.has_filter() {
        return Err(SearchError::InvalidQuery);
    }

    let limit = if options.limit == 0 {
        DEFAULT_RESULT_LIMIT
    } else {
        options.limit.min(MAX_RESULT_LIMIT)
    };

    let method_filter = options
        .method_filter
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(|m| HttpMethod::from_str(m).ok());

    let mut seen: AHashSet<(&str, HttpMethod)> = AHashSet::new();
    let mut hits: Vec<SearchHit> = Vec::new();

    for (record, tokens) in index.scored_entries() {
        // Hard pre-filters, AND semantics.
        match method_filter {
            // An unparsable method filter matches no record.
            Some(None) => continue,
            Some(Some(method)) if record.method != method => continue,
            _ => {}
        }
        if let Some(path_query) = non_empty(&options.path_query)
            && !record
                .path
                .to_lowercase()
                .contains(&path_query.to_lowercase())
        {
            continue;
        }
        if let Some(description_query) = non_empty(&options.description_query) {
            let q = description_query.to_lowercase();
            if !record.summary.to_lowercase().contains(&q)
                && !record.description.to_lowercase().contains(&q)
            {
                continue;
            }
        }
        if let Some(tag_filter) = non_empty(&options.tag_filter) {
            let q = tag_filter.to_lowercase();
            if !record.tags.iter().any(|t| t.to_lowercase().contains(&q)) {
                continue;
            }
        }

        // Filter-only requests rank every surviving record equally; the
        // tie-break below keeps the ordering deterministic.
        let relevance = match query {
            Some(q) => score(q, options.mode, record, tokens),
            None => 1.0,
        };
        if relevance <= 0.0 {
            continue;
        }

        if !seen.insert((record.path.as_str(), record.method)) {
            continue;
        }
        hits.push(to_hit(record, relevance));
    }

    // Descending score, then shorter summaries first (more specific), then
    // path and method for full determinism.
    hits.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.summary.len().cmp(&b.summary.len()))
            .then_with(|| a.path.cmp(&b.path))
            .then_with(|| a.method.as_str().cmp(b.method.as_str()))
    });
    hits.truncate(limit);

    tracing::debug!(
        query = query.unwrap_or(""),
        mode = options.mode.as_str(),
        results = hits.len(),
        "Search completed"
    );

    Ok(hits)
}

fn non_empty(filter: &Option<String>) -> Option<&str> {
    filter.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn to_hit(record: &EndpointRecord, score: f64) -> SearchHit {
    SearchHit {
        path: record.path.clone(),
        method: record.method,
        operation_id: record.operation_id.clone(),
        summary: record.summary.clone(),
        description: truncate_chars(&record.description, RESULT_DESCRIPTION_CHARS),
        tags: record.tags.clone(),
        sample_languages: record.sample_languages(),
        score,
    }
}

/// Char-boundary-safe truncation with an ellipsis marker.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn truncation_is_char_boundary_safe() {
        let text = "あ".repeat(120);
        let truncated = truncate_chars(&text, 100);
        check!(truncated.chars().count() == 103);
        check!(truncated.ends_with("..."));
    }

    #[test]
    fn short_descriptions_pass_through() {
        check!(truncate_chars("short", 100) == "short");
    }
}
