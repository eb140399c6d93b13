//! Stream loop: read a line, dispatch it, write the response, repeat.
//!
//! Requests are handled strictly one at a time. The loop stops on end of
//! input or when the shutdown future resolves; neither is an error.

use super::lines::LineTransport;
use crate::config::Settings;
use crate::error::{McpError, McpResult};
use crate::mcp::helpers::rpc_failure;
use crate::mcp::{Dispatcher, JsonRpcResponse};
use serde_json::Value;
use std::future::{self, Future};
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

pub struct StreamServer<R, W> {
    transport: LineTransport<R, W>,
    dispatcher: Dispatcher,
    verbose: bool,
    state: LoopState,
}

impl<R, W> StreamServer<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W, dispatcher: Dispatcher, settings: &Settings) -> Self {
        Self::with_transport(LineTransport::new(reader, writer), dispatcher, settings)
    }

    pub fn with_transport(
        transport: LineTransport<R, W>,
        dispatcher: Dispatcher,
        settings: &Settings,
    ) -> Self {
        Self {
            transport,
            dispatcher,
            verbose: settings.verbose,
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Serve until end of input
    pub async fn run(&mut self) -> McpResult<()> {
        self.run_until(future::pending::<()>()).await
    }

    /// Serve until end of input or until `shutdown` resolves, whichever
    /// comes first. A read in progress at shutdown is abandoned.
    ///
    /// Only I/O failures on the streams are returned as errors; request
    /// failures are answered on the output stream and the loop carries on.
    pub async fn run_until<F: Future>(&mut self, shutdown: F) -> McpResult<()> {
        tokio::pin!(shutdown);

        while self.state == LoopState::Running {
            let next = tokio::select! {
                biased;
                _ = &mut shutdown => None,
                line = self.transport.read_line() => Some(line),
            };

            match next {
                None => {
                    if self.verbose {
                        info!("Server shutting down...");
                    }
                    self.state = LoopState::Stopped;
                }
                Some(Ok(None)) => {
                    if self.verbose {
                        debug!("EOF received, stopping");
                    }
                    self.state = LoopState::Stopped;
                }
                Some(Ok(Some(line))) => {
                    if let Err(e) = self.process_line(&line).await {
                        self.state = LoopState::Stopped;
                        return Err(e);
                    }
                }
                Some(Err(e)) => {
                    self.state = LoopState::Stopped;
                    return Err(e);
                }
            }
        }

        Ok(())
    }

    async fn process_line(&mut self, line: &[u8]) -> McpResult<()> {
        let response = match serde_json::from_slice::<Value>(line) {
            Ok(request) => self.dispatcher.handle(request),
            Err(e) => {
                if self.verbose {
                    error!("Invalid JSON received: {}", e);
                }
                rpc_failure(Value::Null, &McpError::InvalidJson)
            }
        };

        self.write_response(&response).await
    }

    async fn write_response(&mut self, response: &JsonRpcResponse) -> McpResult<()> {
        let line = serde_json::to_vec(response)?;
        self.transport.write_line(&line).await
    }

    pub fn into_parts(self) -> (R, W) {
        self.transport.into_parts()
    }
}
