//! stdio transport for JSON-RPC 2.0 over NDJSON
//!
//! - Line framing (`LineTransport`)
//! - The request/response loop (`StreamServer`)

pub mod lines;
pub mod server;

pub use lines::LineTransport;
pub use server::{LoopState, StreamServer};

use crate::config::Settings;
use crate::error::McpResult;
use crate::mcp::Dispatcher;
use tracing::info;

/// Serve on stdin/stdout until end of input or Ctrl-C.
pub async fn serve_stdio(settings: Settings) -> McpResult<()> {
    let dispatcher = Dispatcher::new(&settings);
    let mut server = StreamServer::with_transport(LineTransport::stdio(), dispatcher, &settings);

    if settings.verbose {
        info!("MCP Completion Service started");
    }

    server
        .run_until(async {
            // Without a signal handler, only end of input stops the loop.
            if tokio::signal::ctrl_c().await.is_err() {
                std::future::pending::<()>().await;
            }
        })
        .await
}
