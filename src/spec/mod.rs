//! Specification loading: document parsing and normalized records.

pub mod loader;
pub mod model;

pub use loader::{RawSpec, load_spec_file, load_spec_str};
pub use model::{
    CodeSample, EndpointRecord, HttpMethod, ParameterLocation, ParameterRecord, PropertyRecord,
    SchemaRecord,
};
