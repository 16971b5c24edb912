//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration
//! - Build the HTTP server (route table, upstream client, static root)
//! - Bind the listener and spawn the serve loop
//! - Hand back a [`ServerHandle`] that owns the socket until stopped
//!
//! # Design Decisions
//! - Fail fast: any startup error is returned before traffic is accepted
//! - The listener binds last
//! - Binding port 0 is allowed; [`ServerHandle::local_addr`] reports the
//!   port actually chosen

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::config::validation::join_errors;
use crate::config::{validate_config, GatewayConfig, ValidationError};
use crate::http::HttpServer;
use crate::lifecycle::shutdown::Shutdown;

/// Reasons the gateway cannot start or stop cleanly.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {}", join_errors(.0))]
    InvalidConfig(Vec<ValidationError>),

    #[error("failed to build upstream client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),

    #[error("server task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// A running gateway.
///
/// Dropping the handle without calling [`ServerHandle::stop`] also stops the
/// server, because the shutdown channel closes.
#[derive(Debug)]
pub struct ServerHandle {
    local_addr: SocketAddr,
    shutdown: Shutdown,
    task: JoinHandle<Result<(), std::io::Error>>,
}

impl ServerHandle {
    /// Address the listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting connections, let in-flight requests finish, and
    /// release the socket.
    pub async fn stop(self) -> Result<(), StartupError> {
        self.shutdown.trigger();
        self.task.await??;
        tracing::info!(address = %self.local_addr, "Gateway stopped");
        Ok(())
    }
}

/// Validate `config`, bind the listener and start serving.
pub async fn start(config: GatewayConfig) -> Result<ServerHandle, StartupError> {
    validate_config(&config).map_err(StartupError::InvalidConfig)?;

    let address = config.listener.bind_address.clone();
    let server = HttpServer::new(config)?;

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.clone(),
            source,
        })?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Listening for connections");

    let shutdown = Shutdown::new();
    let signal = shutdown.subscribe();
    let task = tokio::spawn(server.run(listener, signal));

    Ok(ServerHandle {
        local_addr,
        shutdown,
        task,
    })
}

/// Startup banner printed by the binary.
pub fn banner(addr: SocketAddr) -> String {
    const WIDTH: usize = 38;
    let line = |text: &str| format!("  ║   {:<width$}║\n", text, width = WIDTH - 3);
    let rule = "═".repeat(WIDTH);

    let mut out = String::from("\n");
    out.push_str(&format!("  ╔{}╗\n", rule));
    out.push_str(&line("CodeShell Server is ready!"));
    out.push_str(&format!("  ╠{}╣\n", rule));
    out.push_str(&line(&format!("http://localhost:{}", addr.port())));
    out.push_str(&line(""));
    out.push_str(&line("Ctrl+C to stop"));
    out.push_str(&format!("  ╚{}╝\n", rule));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ephemeral_config() -> GatewayConfig {
        let mut config = GatewayConfig::default();
        config.listener.bind_address = "127.0.0.1:0".into();
        config
    }

    #[tokio::test]
    async fn test_start_reports_bound_port_and_stop_releases_it() {
        let handle = start(ephemeral_config()).await.unwrap();
        let addr = handle.local_addr();
        assert_ne!(addr.port(), 0);

        handle.stop().await.unwrap();

        // The port can be bound again once the handle is stopped.
        let rebound = TcpListener::bind(addr).await;
        assert!(rebound.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected_before_binding() {
        let mut config = ephemeral_config();
        config.upstream.url = "not a url".into();

        let err = start(config).await.unwrap_err();
        assert!(matches!(err, StartupError::InvalidConfig(ref errors) if errors.len() == 1));
    }

    #[tokio::test]
    async fn test_bind_conflict_is_reported() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let mut config = ephemeral_config();
        config.listener.bind_address = taken.local_addr().unwrap().to_string();

        let err = start(config).await.unwrap_err();
        assert!(matches!(err, StartupError::Bind { .. }));
    }

    #[test]
    fn test_banner_mentions_port() {
        let text = banner("0.0.0.0:3000".parse().unwrap());
        assert!(text.contains("http://localhost:3000"));
        assert!(text.contains("Ctrl+C to stop"));

        let widths: Vec<usize> = text
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| l.chars().count())
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{text}");
    }
}
