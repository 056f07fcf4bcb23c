pub mod cli;
pub mod error;
pub mod format;
pub mod sample;
pub mod search;
pub mod server;
pub mod spec;
pub mod state;
pub mod tools;
pub mod tracing;

pub use error::{Result, SearchError};
pub use search::{SearchHit, SearchIndex, SearchMode};
pub use server::ApiServer;
