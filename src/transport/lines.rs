//! Newline-delimited framing over async byte streams
//!
//! One message per line. Lines are handed out as raw bytes so that invalid
//! UTF-8 surfaces as a JSON parse failure rather than a transport error.

use crate::error::McpResult;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

/// Line transport for the MCP protocol
pub struct LineTransport<R, W> {
    reader: R,
    writer: W,
}

impl LineTransport<BufReader<io::Stdin>, io::Stdout> {
    /// Transport over the process's standard streams
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R, W> LineTransport<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Read the next line with trailing whitespace removed.
    /// Returns `None` at end of stream.
    pub async fn read_line(&mut self) -> McpResult<Option<Vec<u8>>> {
        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line).await? == 0 {
            return Ok(None); // EOF
        }

        while line.last().is_some_and(|b| b.is_ascii_whitespace()) {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Write one line and flush it before returning
    pub async fn write_line(&mut self, line: &[u8]) -> McpResult<()> {
        let mut frame = Vec::with_capacity(line.len() + 1);
        frame.extend_from_slice(line);
        frame.push(b'\n');

        self.writer.write_all(&frame).await?;
        self.writer.flush().await?;
        Ok(())
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
