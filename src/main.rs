use anyhow::{Context, bail};
use clap::Parser;
use openapi_mcp::cli::{Cli, Commands};
use openapi_mcp::search::{SearchIndex, SearchMode, SearchOptions, search};
use openapi_mcp::server::ApiServer;
use openapi_mcp::spec::load_spec_file;
use openapi_mcp::state::IndexState;
use rmcp::{ServiceExt, transport::stdio};
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the MCP protocol stream.
    openapi_mcp::tracing::init();

    let cli = Cli::parse();

    let spec_path: PathBuf = match cli.spec {
        Some(path) => path,
        None => match std::env::var_os("OPENAPI_SPEC_PATH") {
            Some(path) => PathBuf::from(path),
            None => bail!(
                "no specification document given: pass --spec or set OPENAPI_SPEC_PATH"
            ),
        },
    };

    let raw = load_spec_file(&spec_path)
        .with_context(|| format!("failed to load {}", spec_path.display()))?;
    let index = SearchIndex::build(raw)?;
    let state = Arc::new(IndexState::new(index));

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            tracing::info!(spec = %spec_path.display(), "Starting openapi-mcp MCP server");

            let server = ApiServer::new(state);
            let service = server.serve(stdio()).await.inspect_err(|e| {
                tracing::error!("Error serving MCP server: {:?}", e);
            })?;

            service.waiting().await?;
        }
        Commands::Search {
            query,
            mode,
            limit,
            method,
            tag,
        } => {
            let options = SearchOptions {
                query: Some(query),
                path_query: None,
                description_query: None,
                tag_filter: tag,
                method_filter: method,
                mode: SearchMode::parse(&mode)?,
                limit,
            };
            let index = state.snapshot().await;
            let hits = search(&index, &options)?;
            println!("{}", serde_json::to_string_pretty(&hits)?);
        }
    }

    Ok(())
}
