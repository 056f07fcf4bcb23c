//! Searchable corpus built from loaded specification records.
//!
//! The index owns every endpoint and schema record plus the derived lookup
//! structures. It is built once, held as process-wide read-only state, and
//! swapped wholesale on rebuild. Nothing here relies on hash-iteration
//! order: records are sorted at build time, so identical input produces
//! identical output.

use crate::error::SearchError;
use crate::spec::model::{EndpointRecord, HttpMethod, SchemaRecord};
use crate::spec::RawSpec;
use ahash::AHashMap;
use rapidfuzz::distance::levenshtein;
use serde_json::Value;

use super::tokenize::tokenize;

/// Per-field token lists for one endpoint, computed once at build time.
#[derive(Debug, Clone)]
pub(crate) struct FieldTokens {
    pub(crate) path: Vec<String>,
    pub(crate) summary: Vec<String>,
    pub(crate) description: Vec<String>,
    pub(crate) tags: Vec<String>,
    pub(crate) operation_id: Vec<String>,
    /// Parameter names only; parameter descriptions add noise.
    pub(crate) parameters: Vec<String>,
}

impl FieldTokens {
    pub(crate) fn for_endpoint(record: &EndpointRecord) -> Self {
        let mut tags = Vec::new();
        for tag in &record.tags {
            tags.extend(tokenize(tag));
        }
        let mut parameters = Vec::new();
        for param in &record.parameters {
            parameters.extend(tokenize(&param.name));
        }
        Self {
            path: tokenize(&record.path),
            summary: tokenize(&record.summary),
            description: tokenize(&record.description),
            tags,
            operation_id: tokenize(&record.operation_id),
            parameters,
        }
    }
}

/// The immutable search corpus: all records plus derived lookups.
#[derive(Debug)]
pub struct SearchIndex {
    endpoints: Vec<EndpointRecord>,
    /// Parallel to `endpoints`.
    tokens: Vec<FieldTokens>,
    by_path_method: AHashMap<(String, HttpMethod), usize>,
    by_operation_id: AHashMap<String, usize>,
    schemas: Vec<SchemaRecord>,
    by_schema_name: AHashMap<String, usize>,
}

impl SearchIndex {
    /// Builds the index from loaded records.
    ///
    /// Duplicate `operationId` values or duplicate `(path, method)` pairs are
    /// corpus-integrity violations and abort the build; dangling schema
    /// references are logged and tolerated.
    pub fn build(raw: RawSpec) -> Result<Self, SearchError> {
        let start = std::time::Instant::now();

        let mut endpoints = raw.endpoints;
        endpoints.sort_by(|a, b| {
            a.path
                .cmp(&b.path)
                .then_with(|| a.method.as_str().cmp(b.method.as_str()))
        });

        let mut schemas = raw.schemas;
        schemas.sort_by(|a, b| a.name.cmp(&b.name));

        let mut by_path_method = AHashMap::with_capacity(endpoints.len());
        let mut by_operation_id = AHashMap::with_capacity(endpoints.len());
        for (idx, record) in endpoints.iter().enumerate() {
            let key = (record.path.clone(), record.method);
            if by_path_method.insert(key, idx).is_some() {
                return Err(SearchError::DuplicatePathMethod {
                    path: record.path.clone(),
                    method: record.method.to_string(),
                });
            }
            if by_operation_id
                .insert(record.operation_id.clone(), idx)
                .is_some()
            {
                return Err(SearchError::DuplicateOperationId(
                    record.operation_id.clone(),
                ));
            }
        }

        let mut by_schema_name = AHashMap::with_capacity(schemas.len());
        for (idx, schema) in schemas.iter().enumerate() {
            by_schema_name.insert(schema.name.clone(), idx);
        }

        let tokens = endpoints.iter().map(FieldTokens::for_endpoint).collect();

        let index = Self {
            endpoints,
            tokens,
            by_path_method,
            by_operation_id,
            schemas,
            by_schema_name,
        };
        index.check_schema_references();

        tracing::info!(
            endpoints = index.endpoints.len(),
            schemas = index.schemas.len(),
            elapsed = ?start.elapsed(),
            "Built search index"
        );

        Ok(index)
    }

    /// Reports schema references that do not resolve within this snapshot.
    /// Non-fatal: a dangling reference degrades detail output, not search.
    fn check_schema_references(&self) {
        for record in &self.endpoints {
            let mut refs = Vec::new();
            if let Some(body) = &record.request_body {
                collect_schema_refs(body, &mut refs);
            }
            for response in record.responses.values() {
                collect_schema_refs(response, &mut refs);
            }
            for name in refs {
                if !self.by_schema_name.contains_key(&name) {
                    tracing::warn!(
                        operation_id = %record.operation_id,
                        schema = %name,
                        "Dangling schema reference"
                    );
                }
            }
        }
    }

    pub fn endpoints(&self) -> &[EndpointRecord] {
        &self.endpoints
    }

    pub fn schemas(&self) -> &[SchemaRecord] {
        &self.schemas
    }

    pub fn endpoint_by_key(&self, path: &str, method: HttpMethod) -> Option<&EndpointRecord> {
        self.by_path_method
            .get(&(path.to_string(), method))
            .map(|&idx| &self.endpoints[idx])
    }

    pub fn endpoint_by_operation_id(&self, operation_id: &str) -> Option<&EndpointRecord> {
        self.by_operation_id
            .get(operation_id)
            .map(|&idx| &self.endpoints[idx])
    }

    pub fn schema_by_name(&self, name: &str) -> Option<&SchemaRecord> {
        self.by_schema_name.get(name).map(|&idx| &self.schemas[idx])
    }

    /// Records paired with their pre-computed token lists, in index order.
    pub(crate) fn scored_entries(
        &self,
    ) -> impl Iterator<Item = (&EndpointRecord, &FieldTokens)> {
        self.endpoints.iter().zip(self.tokens.iter())
    }

    /// Operation ids closest to `query` by normalized edit distance.
    /// Never empty while the corpus has endpoints; used for `NotFound`
    /// suggestion lists.
    pub fn nearest_operation_ids(&self, query: &str, limit: usize) -> Vec<String> {
        nearest(self.endpoints.iter().map(|e| e.operation_id.as_str()), query, limit)
    }

    /// Schema names closest to `query` by normalized edit distance.
    pub fn nearest_schema_names(&self, query: &str, limit: usize) -> Vec<String> {
        nearest(self.schemas.iter().map(|s| s.name.as_str()), query, limit)
    }
}

/// Rank candidate names by similarity to the query, best first. Ties break
/// on the name itself so suggestion lists are stable.
fn nearest<'a>(
    candidates: impl Iterator<Item = &'a str>,
    query: &str,
    limit: usize,
) -> Vec<String> {
    let query_lower = query.to_lowercase();
    let mut scored: Vec<(f64, &str)> = candidates
        .map(|name| {
            let score =
                levenshtein::normalized_similarity(query_lower.chars(), name.to_lowercase().chars());
            (score, name)
        })
        .collect();
    scored.sort_by(|(a_score, a_name), (b_score, b_name)| {
        b_score.total_cmp(a_score).then_with(|| a_name.cmp(b_name))
    });
    scored
        .into_iter()
        .take(limit)
        .map(|(_, name)| name.to_string())
        .collect()
}

/// Collects `$ref` targets under `#/components/schemas/` from a raw body or
/// response object.
fn collect_schema_refs(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                if key == "$ref" {
                    if let Some(target) = child.as_str()
                        && let Some(name) = target.strip_prefix("#/components/schemas/")
                    {
                        out.push(name.to_string());
                    }
                } else {
                    collect_schema_refs(child, out);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_schema_refs(item, out);
            }
        }
        _ => {}
    }
}

/// Extracts the schema type-reference name from a request-body or response
/// object, if one is declared. The first `$ref` in document order wins.
pub(crate) fn schema_ref_name(value: &Value) -> Option<String> {
    let mut refs = Vec::new();
    collect_schema_refs(value, &mut refs);
    refs.into_iter().next()
}
