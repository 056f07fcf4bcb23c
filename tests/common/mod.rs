//! Shared test fixtures for integration tests.
//!
//! Every test builds its index from [`FIXTURE_SPEC`], a small but realistic
//! document: multiple tagged operations, a path-level parameter, a stored
//! code sample, a multi-line markdown description and a handful of named
//! schemas with cross-references.

use openapi_mcp::search::SearchIndex;
use openapi_mcp::spec::load_spec_str;
use rstest::fixture;

#[allow(dead_code)] // Used across different integration test crates
pub const FIXTURE_SPEC: &str = r##"{
    "openapi": "3.0.0",
    "info": { "title": "Auth API", "version": "1.0.0" },
    "paths": {
        "/api/auth/authorization": {
            "post": {
                "operationId": "auth_authorization_api",
                "summary": "Process authorization request",
                "description": "Processes an authorization request from a client application.",
                "tags": ["Authorization"]
            }
        },
        "/api/auth/token": {
            "post": {
                "operationId": "auth_token_api",
                "summary": "Issue access token",
                "description": "This endpoint issues an access token and optionally a refresh token to the client application after validating the grant.\n\n## Supported Grant Types\n\n- authorization_code\n- refresh_token\n\n**Security Notes**\n\nAlways validate the redirect URI before issuing a token.",
                "tags": ["Token"],
                "responses": {
                    "200": {
                        "description": "Issued token",
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/Token" }
                            }
                        }
                    }
                }
            }
        },
        "/api/auth/token/revoke": {
            "post": {
                "operationId": "auth_token_revoke_api",
                "summary": "Revoke access token",
                "description": "Revokes an access token or refresh token.",
                "tags": ["Token"]
            }
        },
        "/api/service/get/{serviceId}": {
            "get": {
                "operationId": "service_get_api",
                "summary": "Get service",
                "description": "Returns the configuration of one service.",
                "tags": ["Service"],
                "parameters": [
                    {
                        "name": "serviceId",
                        "in": "path",
                        "required": true,
                        "schema": { "type": "string" },
                        "description": "Service identifier"
                    }
                ]
            }
        },
        "/api/{serviceId}/client/create": {
            "parameters": [
                {
                    "name": "serviceId",
                    "in": "path",
                    "required": true,
                    "schema": { "type": "string" },
                    "description": "Service identifier"
                }
            ],
            "post": {
                "operationId": "client_create_api",
                "summary": "Create client",
                "description": "Registers a new client application under the service.",
                "tags": ["Client"],
                "requestBody": {
                    "content": {
                        "application/json": {
                            "schema": { "$ref": "#/components/schemas/Client" }
                        }
                    }
                },
                "responses": {
                    "201": {
                        "description": "Created client",
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/Client" }
                            }
                        }
                    }
                },
                "x-code-samples": [
                    { "lang": "Go", "source": "// stored go sample" }
                ]
            }
        }
    },
    "components": {
        "schemas": {
            "Client": {
                "type": "object",
                "title": "Client",
                "description": "A registered client application.",
                "required": ["clientName"],
                "properties": {
                    "clientName": { "type": "string", "description": "Display name" },
                    "clientIdAliasEnabled": { "type": "boolean" },
                    "redirectUris": { "type": "array" }
                }
            },
            "Token": {
                "type": "object",
                "description": "An issued access token.",
                "properties": {
                    "accessToken": { "type": "string" },
                    "expiresIn": { "type": "integer" }
                }
            },
            "Service": {
                "type": "object",
                "description": "A tenant-level service configuration.",
                "properties": {
                    "serviceName": { "type": "string" },
                    "issuer": { "type": "string" }
                }
            }
        }
    }
}"##;

/// Builds a fresh index from the fixture document.
#[allow(dead_code)] // Used across different integration test crates
pub fn build_index() -> SearchIndex {
    let raw = load_spec_str(FIXTURE_SPEC).expect("fixture document must parse");
    SearchIndex::build(raw).expect("fixture index must build")
}

#[allow(dead_code)] // Used across different integration test crates
#[fixture]
pub fn index() -> SearchIndex {
    build_index()
}
