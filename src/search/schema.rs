//! Schema search: the query-engine/detail pair over schema records.
//!
//! Mirrors endpoint search but is restricted to schema names and property
//! names, with partial scoring and a fuzzy fallback for typos.

use crate::error::SearchError;
use crate::spec::model::SchemaRecord;
use rapidfuzz::distance::levenshtein;
use serde::Serialize;

use super::index::SearchIndex;
use super::query::{DEFAULT_RESULT_LIMIT, MAX_RESULT_LIMIT};
use super::tokenize::tokenize;

const WEIGHT_NAME: f64 = 4.0;
const WEIGHT_PROPERTY: f64 = 2.0;
const FUZZY_SIMILARITY_THRESHOLD: f64 = 0.7;

/// One ranked schema hit.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaHit {
    pub name: String,
    pub schema_type: String,
    pub title: String,
    pub description: String,
    pub score: f64,
}

/// Searches schema records by name and property names.
///
/// An absent query returns the full schema list in name order (the index is
/// already name-sorted), still subject to the limit clamp.
pub fn search_schemas(index: &SearchIndex, query: Option<&str>, limit: usize) -> Vec<SchemaHit> {
    let limit = if limit == 0 {
        DEFAULT_RESULT_LIMIT
    } else {
        limit.min(MAX_RESULT_LIMIT)
    };

    let query = query.map(str::trim).filter(|q| !q.is_empty());
    let Some(query) = query else {
        return index
            .schemas()
            .iter()
            .take(limit)
            .map(|s| to_hit(s, 0.0))
            .collect();
    };

    let mut hits: Vec<SchemaHit> = index
        .schemas()
        .iter()
        .filter_map(|schema| {
            let score = score_schema(query, schema);
            (score > 0.0).then(|| to_hit(schema, score))
        })
        .collect();

    hits.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
    hits.truncate(limit);
    hits
}

/// Resolves one schema by exact name, or fails with nearest-name
/// suggestions.
pub fn schema_detail<'a>(
    index: &'a SearchIndex,
    name: &str,
) -> Result<&'a SchemaRecord, SearchError> {
    index
        .schema_by_name(name)
        .ok_or_else(|| SearchError::NotFound {
            identifier: name.to_string(),
            suggestions: index.nearest_schema_names(name, 5),
        })
}

/// Partial substring score with a fuzzy token fallback.
fn score_schema(query: &str, schema: &SchemaRecord) -> f64 {
    let q = query.to_lowercase();

    let mut score = 0.0;
    if schema.name.to_lowercase().contains(&q) {
        score += WEIGHT_NAME;
    }
    if schema
        .properties
        .iter()
        .any(|p| p.name.to_lowercase().contains(&q))
    {
        score += WEIGHT_PROPERTY;
    }
    if score > 0.0 {
        return score;
    }

    // Fuzzy fallback for typo'd queries.
    let query_tokens = tokenize(query);
    if query_tokens.is_empty() {
        return 0.0;
    }
    let name_tokens = tokenize(&schema.name);
    let mut property_tokens = Vec::new();
    for p in &schema.properties {
        property_tokens.extend(tokenize(&p.name));
    }

    let total = query_tokens.len() as f64;
    let name_matched = query_tokens
        .iter()
        .filter(|t| fuzzy_hit(t, &name_tokens))
        .count();
    let property_matched = query_tokens
        .iter()
        .filter(|t| fuzzy_hit(t, &property_tokens))
        .count();

    name_matched as f64 / total * WEIGHT_NAME
        + property_matched as f64 / total * WEIGHT_PROPERTY
}

fn fuzzy_hit(query_token: &str, targets: &[String]) -> bool {
    targets.iter().any(|t| {
        t == query_token
            || levenshtein::normalized_similarity(query_token.chars(), t.chars())
                >= FUZZY_SIMILARITY_THRESHOLD
    })
}

fn to_hit(schema: &SchemaRecord, score: f64) -> SchemaHit {
    SchemaHit {
        name: schema.name.clone(),
        schema_type: schema.schema_type.clone(),
        title: schema.title.clone(),
        description: schema.description.clone(),
        score,
    }
}
