use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "openapi-mcp")]
#[command(about = "Search an API specification document for AI assistants", long_about = None)]
pub struct Cli {
    /// Path to the specification document (falls back to the
    /// OPENAPI_SPEC_PATH environment variable)
    #[arg(short, long, global = true)]
    pub spec: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the MCP protocol over stdio (the default)
    Serve,
    /// Run one endpoint search and print the results
    Search {
        query: String,
        #[arg(short, long, default_value = "natural")]
        mode: String,
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
        #[arg(short = 'M', long)]
        method: Option<String>,
        #[arg(short, long)]
        tag: Option<String>,
    },
}
