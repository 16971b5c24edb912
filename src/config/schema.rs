//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.
//! Every section has defaults, so an empty file yields the stock gateway:
//! port 3000 on all interfaces, the working directory as static root, and
//! Wandbox as the compile upstream.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Static file serving settings.
    pub static_files: StaticFilesConfig,

    /// Compile upstream settings.
    pub upstream: UpstreamConfig,

    /// Request size limits.
    pub limits: LimitsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl ListenerConfig {
    /// Replace the port of the bind address, keeping the host part.
    pub fn set_port(&mut self, port: u16) {
        let host = match self.bind_address.rsplit_once(':') {
            Some((host, _)) => host.to_string(),
            None => self.bind_address.clone(),
        };
        self.bind_address = format!("{}:{}", host, port);
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Static file serving configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Directory request paths are resolved against.
    pub root: PathBuf,

    /// File served for `/`.
    pub default_file: String,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            default_file: "code-terminal-widget.html".to_string(),
        }
    }
}

/// Compile upstream configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Full URL of the JSON compile endpoint.
    pub url: String,

    /// Connection establishment timeout in seconds (unset = transport default).
    pub connect_timeout_secs: Option<u64>,

    /// Total request timeout in seconds (unset = no timeout).
    pub request_timeout_secs: Option<u64>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: "https://wandbox.org/api/compile.json".to_string(),
            connect_timeout_secs: None,
            request_timeout_secs: None,
        }
    }
}

/// Request size limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum buffered compile request body in bytes.
    pub max_body_size: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_size: 2 * 1024 * 1024, // 2MB
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
