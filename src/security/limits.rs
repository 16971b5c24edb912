//! Request body limits.
//!
//! Compile bodies are buffered whole before forwarding, so their size is
//! capped. The cap is carried by axum's `DefaultBodyLimit` and enforced by the
//! `Bytes` extractor, which answers oversized bodies with
//! 413 Payload Too Large (checked against Content-Length first, then while
//! reading chunked bodies).

use axum::extract::DefaultBodyLimit;

use crate::config::LimitsConfig;

/// Layer carrying the configured body cap.
pub fn body_limit(config: &LimitsConfig) -> DefaultBodyLimit {
    DefaultBodyLimit::max(config.max_body_size)
}
