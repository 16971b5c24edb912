//! CodeShell gateway binary.
//!
//! Serves the code widget and relays its compile requests to Wandbox.
//! Run with `codeshell`, then open http://localhost:3000.

use std::path::PathBuf;

use clap::Parser;

use codeshell::config::{self, GatewayConfig};
use codeshell::lifecycle;
use codeshell::observability;

#[derive(Parser)]
#[command(name = "codeshell")]
#[command(about = "Local gateway for the CodeShell code widget", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory to serve static files from
    #[arg(long)]
    root: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<GatewayConfig, config::ConfigError> {
        let mut config = match &self.config {
            Some(path) => config::load_config(path)?,
            None => GatewayConfig::default(),
        };

        if let Some(port) = self.port {
            config.listener.set_port(port);
        }
        if let Some(root) = self.root {
            config.static_files.root = root;
        }
        if let Some(level) = self.log_level {
            config.observability.log_level = level;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config()?;
    observability::init_logging(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.url,
        static_root = %config.static_files.root.display(),
        max_body_size = config.limits.max_body_size,
        "Configuration loaded"
    );

    let handle = lifecycle::start(config).await?;
    println!("{}", lifecycle::banner(handle.local_addr()));

    lifecycle::wait_for_signal().await;
    handle.stop().await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
