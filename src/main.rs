use clap::Parser;
use completion_service::config::Settings;
use completion_service::transport::serve_stdio;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// MCP Completion Service
#[derive(Debug, Parser)]
#[command(name = "completion-service", version, about = "MCP Completion Service")]
struct Cli {
    /// Disable logging output
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.quiet);

    // Log to stderr, stdout is for JSON-RPC
    let filter = if settings.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    } else {
        EnvFilter::new("off")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    let code = match serve_stdio(settings).await {
        Ok(()) => 0,
        Err(e) => {
            if settings.verbose {
                error!("Server error: {}", e);
            }
            1
        }
    };

    // The stdin reader thread cannot be cancelled, so don't wait for runtime teardown.
    std::process::exit(code)
}
