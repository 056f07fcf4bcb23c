mod common;

use assert2::check;
use common::FIXTURE_SPEC;
use openapi_mcp::SearchError;
use openapi_mcp::search::SearchIndex;
use openapi_mcp::spec::model::HttpMethod;
use openapi_mcp::spec::{load_spec_file, load_spec_str};

/// Every record loaded from disk resolves through both index keys with
/// identical content.
#[test]
fn file_round_trip_is_complete() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("openapi.json");
    std::fs::write(&path, FIXTURE_SPEC).unwrap();

    let raw = load_spec_file(&path).unwrap();
    check!(raw.endpoints.len() == 5);
    check!(raw.schemas.len() == 3);
    check!(raw.warnings.is_empty());

    let index = SearchIndex::build(raw).unwrap();
    for record in index.endpoints() {
        let by_key = index.endpoint_by_key(&record.path, record.method).unwrap();
        let by_id = index.endpoint_by_operation_id(&record.operation_id).unwrap();
        check!(by_key == record);
        check!(by_id == record);
    }
}

#[test]
fn missing_file_is_an_error_with_context() {
    let err = load_spec_file(std::path::Path::new("/nonexistent/openapi.json")).unwrap_err();
    check!(err.to_string().contains("/nonexistent/openapi.json"));
}

#[test]
fn unparsable_document_is_fatal() {
    let err = load_spec_str("{ not json at all").unwrap_err();
    check!(matches!(err, SearchError::MalformedSpec(_)));
}

/// A single malformed entry is skipped with a warning; the rest of the
/// document still loads.
#[test]
fn partial_failures_are_tolerated() {
    let doc = r#"{
        "paths": {
            "/api/good": { "get": { "operationId": "good_api" } },
            "/api/broken": { "get": { "summary": "no operationId" } },
            "/api/odd": { "purge": { "operationId": "odd_api" } }
        }
    }"#;
    let raw = load_spec_str(doc).unwrap();
    check!(raw.endpoints.len() == 1);
    check!(raw.endpoints[0].operation_id == "good_api");
    check!(raw.warnings.len() == 2);
}

/// Duplicate identifiers are corpus-integrity violations: no partial index
/// is built.
#[test]
fn duplicate_operation_ids_abort_the_build() {
    let doc = r#"{
        "paths": {
            "/api/a": { "get": { "operationId": "dup_api" } },
            "/api/b": { "get": { "operationId": "dup_api" } }
        }
    }"#;
    let err = SearchIndex::build(load_spec_str(doc).unwrap()).unwrap_err();
    check!(err == SearchError::DuplicateOperationId("dup_api".to_string()));
}

/// A dangling schema reference is logged, not fatal.
#[test]
fn dangling_schema_references_do_not_abort() {
    let doc = r##"{
        "paths": {
            "/api/a": {
                "post": {
                    "operationId": "a_api",
                    "requestBody": {
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/Missing" }
                            }
                        }
                    }
                }
            }
        }
    }"##;
    let index = SearchIndex::build(load_spec_str(doc).unwrap()).unwrap();
    check!(index.endpoint_by_key("/api/a", HttpMethod::Post).is_some());
}

/// Path-level parameters are shared across operations and appended after
/// operation-level ones.
#[test]
fn path_level_parameters_reach_every_operation() {
    let raw = load_spec_str(FIXTURE_SPEC).unwrap();
    let create = raw
        .endpoints
        .iter()
        .find(|e| e.operation_id == "client_create_api")
        .unwrap();
    check!(create.parameters.len() == 1);
    check!(create.parameters[0].name == "serviceId");
    check!(create.parameters[0].required);
}
