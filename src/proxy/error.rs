//! Upstream failure types and the gateway-error payload.

use std::error::Error as StdError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix of every gateway-error message.
pub const UNREACHABLE_PREFIX: &str = "Could not reach Wandbox: ";

/// Failure to complete an exchange with the compile upstream.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// DNS, connect, TLS, reset, timeout or body read failure.
    #[error("{}", describe(.0))]
    Transport(reqwest::Error),
}

/// Render an error followed by its chain of causes.
fn describe(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.ends_with(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

/// JSON body of a 502 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayErrorBody {
    pub error: String,
}

impl GatewayErrorBody {
    pub fn unreachable(err: &UpstreamError) -> Self {
        Self {
            error: format!("{}{}", UNREACHABLE_PREFIX, err),
        }
    }
}
