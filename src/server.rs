//! MCP server implementation.

use crate::state::IndexState;
use crate::tools::api_detail::{ApiDetailRequest, handle_api_detail};
use crate::tools::sample_code::{SampleCodeRequest, handle_sample_code};
use crate::tools::schemas::{
    ListSchemasRequest, SchemaDetailRequest, handle_list_schemas, handle_schema_detail,
};
use crate::tools::search_apis::{SearchApisRequest, handle_search_apis};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars::{JsonSchema, generate::SchemaSettings, transform::AddNullable},
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// MCP server for API specification queries.
#[derive(Clone)]
pub struct ApiServer {
    /// Current search-index snapshot, swapped wholesale on rebuild.
    state: Arc<IndexState>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for ApiServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiServer").finish_non_exhaustive()
    }
}

#[tool_router]
impl ApiServer {
    /// Create a new ApiServer over a built index.
    pub fn new(state: Arc<IndexState>) -> Self {
        Self {
            state,
            tool_router: Self::tool_router(),
        }
    }

    pub fn index_state(&self) -> &Arc<IndexState> {
        &self.state
    }

    #[tool(
        description = "Search API endpoints by free text and filters. Supports exact, partial, fuzzy and natural search modes; results are ranked by relevance with truncated descriptions."
    )]
    async fn search_apis(
        &self,
        Parameters(request): Parameters<SearchApisRequest>,
    ) -> Result<String, String> {
        let index = self.state.snapshot().await;
        handle_search_apis(&index, request)
    }

    #[tool(
        description = "Get full detail for one API endpoint by operation_id or by path and method. Description and body output are size-controlled via style parameters.",
        input_schema = inline_schema_for_type::<ApiDetailRequest>()
    )]
    async fn get_api_detail(
        &self,
        Parameters(request): Parameters<ApiDetailRequest>,
    ) -> Result<String, String> {
        let index = self.state.snapshot().await;
        handle_api_detail(&index, request)
    }

    #[tool(
        description = "Generate sample client code for one API endpoint in curl, python, javascript or java. Stored samples from the specification take precedence."
    )]
    async fn get_sample_code(
        &self,
        Parameters(request): Parameters<SampleCodeRequest>,
    ) -> Result<String, String> {
        let index = self.state.snapshot().await;
        handle_sample_code(&index, request)
    }

    #[tool(
        description = "List or search schema definitions by name and property names. Omit the query to list every schema."
    )]
    async fn list_schemas(
        &self,
        Parameters(request): Parameters<ListSchemasRequest>,
    ) -> Result<String, String> {
        let index = self.state.snapshot().await;
        handle_list_schemas(&index, request)
    }

    #[tool(description = "Get the full definition of one schema by exact name.")]
    async fn get_schema_detail(
        &self,
        Parameters(request): Parameters<SchemaDetailRequest>,
    ) -> Result<String, String> {
        let index = self.state.snapshot().await;
        handle_schema_detail(&index, request)
    }
}

#[tool_handler]
impl ServerHandler for ApiServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.protocol_version = ProtocolVersion::V_2024_11_05;
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.server_info = Implementation::from_build_env();
        info.instructions = Some(
            "openapi-mcp: a search server over one API specification document. \
             Start with search_apis to find endpoints, then get_api_detail or \
             get_sample_code for a specific operation. Schema definitions are \
             available through list_schemas and get_schema_detail."
                .to_string(),
        );
        info
    }
}

/// Generate an inline JSON schema for MCP tools.
///
/// Unlike rmcp's default `schema_for_type()`, this sets `inline_subschemas`
/// so enum parameters (the style enums) are emitted inline rather than as
/// $ref patterns, which MCP clients render as dropdowns.
fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.transforms = vec![Box::new(AddNullable::default())];
    settings.inline_subschemas = true;

    let generator = settings.into_generator();
    let schema = generator.into_root_schema_for::<T>();
    let object = serde_json::to_value(schema).expect("failed to serialize schema");

    let json_object = match object {
        serde_json::Value::Object(object) => object,
        _ => panic!("Schema serialization produced non-object value"),
    };

    Arc::new(json_object)
}
