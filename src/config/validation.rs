//! Configuration validation.
//!
//! Serde handles syntax; this module checks values:
//! - bind address is a socket address
//! - upstream URL is an absolute http(s) URL
//! - default file is a bare file name
//! - limits and timeouts are non-zero
//!
//! Returns all validation errors, not just the first.

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a socket address")]
    BindAddress(String),

    #[error("upstream.url `{0}` is not an http(s) URL")]
    UpstreamUrl(String),

    #[error("static_files.default_file `{0}` must be a plain file name")]
    DefaultFile(String),

    #[error("limits.max_body_size must be greater than zero")]
    ZeroBodyLimit,

    #[error("upstream.{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match Url::parse(&config.upstream.url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
        _ => errors.push(ValidationError::UpstreamUrl(config.upstream.url.clone())),
    }

    let default_file = &config.static_files.default_file;
    if default_file.is_empty()
        || default_file == "."
        || default_file == ".."
        || default_file.contains(['/', '\\'])
    {
        errors.push(ValidationError::DefaultFile(default_file.clone()));
    }

    if config.limits.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if config.upstream.connect_timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout("connect_timeout_secs"));
    }
    if config.upstream.request_timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout("request_timeout_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Render a list of errors on one line.
pub(crate) fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
