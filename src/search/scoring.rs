//! Relevance scoring: one pure scoring function per search mode.
//!
//! `score(query, mode, record) → f64 ≥ 0`; zero means "no match, excluded
//! from results". Field weighting follows a fixed table: a path hit outranks
//! a tag hit outranks a summary hit outranks a description hit.

use crate::error::SearchError;
use crate::spec::model::EndpointRecord;
use rapidfuzz::distance::levenshtein;
use serde::{Deserialize, Serialize};

use super::index::FieldTokens;
use super::tokenize::{strip_stop_words, tokenize};

/// Field weights applied when a query matches several fields. Tunable
/// defaults, not a compatibility contract.
const WEIGHT_PATH: f64 = 4.0;
const WEIGHT_TAG: f64 = 3.0;
const WEIGHT_SUMMARY: f64 = 2.0;
const WEIGHT_DESCRIPTION: f64 = 1.0;

/// A query token counts as matching a target token when their normalized
/// edit similarity reaches this threshold (edit distance ≤ 30% of the longer
/// token's length).
const FUZZY_SIMILARITY_THRESHOLD: f64 = 0.7;

/// Natural-mode multiplier for query tokens that exactly match a tag token.
/// Tags are curated category labels; an exact tag hit is a strong signal.
const TAG_EXACT_BOOST: f64 = 2.0;

/// Closed set of search modes, each with its own scoring function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Exact,
    Partial,
    Fuzzy,
    #[default]
    Natural,
}

impl SearchMode {
    pub(crate) const VALID: &'static [&'static str] = &["exact", "partial", "fuzzy", "natural"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Partial => "partial",
            Self::Fuzzy => "fuzzy",
            Self::Natural => "natural",
        }
    }

    /// Parses a mode string; unrecognized values list the valid modes.
    pub fn parse(mode: &str) -> Result<Self, SearchError> {
        match mode.trim().to_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "partial" => Ok(Self::Partial),
            "fuzzy" => Ok(Self::Fuzzy),
            "natural" => Ok(Self::Natural),
            _ => Err(SearchError::InvalidMode {
                mode: mode.to_string(),
                valid: Self::VALID.to_vec(),
            }),
        }
    }
}

/// Scores one endpoint record against a query in the given mode.
pub(crate) fn score(
    query: &str,
    mode: SearchMode,
    record: &EndpointRecord,
    tokens: &FieldTokens,
) -> f64 {
    match mode {
        SearchMode::Exact => score_exact(query, record),
        SearchMode::Partial => score_partial(query, record),
        SearchMode::Fuzzy => score_fuzzy_tokens(&tokenize(query), tokens, false),
        SearchMode::Natural => {
            score_fuzzy_tokens(&strip_stop_words(tokenize(query)), tokens, true)
        }
    }
}

/// 1.0 when the query equals a field's normalized value verbatim, else 0.
fn score_exact(query: &str, record: &EndpointRecord) -> f64 {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return 0.0;
    }
    let hit = record.path.to_lowercase() == q
        || record.operation_id.to_lowercase() == q
        || record.summary.trim().to_lowercase() == q
        || record.tags.iter().any(|t| t.to_lowercase() == q);
    if hit { 1.0 } else { 0.0 }
}

/// Sum of matched-field weights for a case-insensitive substring query, so
/// an entry matching in both path and description outranks one matching
/// description alone.
fn score_partial(query: &str, record: &EndpointRecord) -> f64 {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return 0.0;
    }
    let mut total = 0.0;
    if record.path.to_lowercase().contains(&q) {
        total += WEIGHT_PATH;
    }
    if record.tags.iter().any(|t| t.to_lowercase().contains(&q)) {
        total += WEIGHT_TAG;
    }
    if record.summary.to_lowercase().contains(&q) {
        total += WEIGHT_SUMMARY;
    }
    if record.description.to_lowercase().contains(&q) {
        total += WEIGHT_DESCRIPTION;
    }
    total
}

/// Typo-tolerant token scoring shared by fuzzy and natural modes.
///
/// Per field: (matched query tokens / total query tokens) × field weight,
/// summed. Natural mode additionally boosts query tokens that exactly match
/// a tag token, and considers parameter-name tokens at description weight.
fn score_fuzzy_tokens(query_tokens: &[String], tokens: &FieldTokens, natural: bool) -> f64 {
    if query_tokens.is_empty() {
        return 0.0;
    }
    let total = query_tokens.len() as f64;

    let mut fields: Vec<(&[String], f64)> = vec![
        (tokens.path.as_slice(), WEIGHT_PATH),
        (tokens.tags.as_slice(), WEIGHT_TAG),
        (tokens.summary.as_slice(), WEIGHT_SUMMARY),
        (tokens.description.as_slice(), WEIGHT_DESCRIPTION),
    ];
    if natural {
        // Parameter names count in natural search, at the lowest weight.
        fields.push((tokens.parameters.as_slice(), WEIGHT_DESCRIPTION));
    }

    let mut score = 0.0;
    for (field_tokens, weight) in fields {
        let matched = query_tokens
            .iter()
            .filter(|q| field_matches(q, field_tokens))
            .count();
        score += matched as f64 / total * weight;
    }

    if natural {
        let exact_tag_hits = query_tokens
            .iter()
            .filter(|q| tokens.tags.iter().any(|t| t == *q))
            .count();
        score += exact_tag_hits as f64 / total * WEIGHT_TAG * (TAG_EXACT_BOOST - 1.0);
    }

    score
}

/// Does any target token match the query token at the similarity threshold?
fn field_matches(query_token: &str, field_tokens: &[String]) -> bool {
    field_tokens.iter().any(|t| {
        t == query_token
            || levenshtein::normalized_similarity(query_token.chars(), t.chars())
                >= FUZZY_SIMILARITY_THRESHOLD
    })
}
