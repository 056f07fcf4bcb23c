//! Search infrastructure: tokenization, index construction, relevance
//! scoring and query evaluation over the immutable corpus.

// Module declarations
pub(crate) mod index;
pub(crate) mod query;
pub(crate) mod schema;
pub(crate) mod scoring;
pub(crate) mod tokenize;

// Public re-exports (used via lib.rs)
pub use index::SearchIndex;
pub use query::{DEFAULT_RESULT_LIMIT, MAX_RESULT_LIMIT, SearchHit, SearchOptions, search};
pub use schema::{SchemaHit, schema_detail, search_schemas};
pub use scoring::SearchMode;
