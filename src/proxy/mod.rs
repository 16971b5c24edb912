//! Compile proxy subsystem.
//!
//! # Data Flow
//! ```text
//! POST /compile (buffered body)
//!     → compile.rs (new upstream connection, POST JSON body)
//!     → upstream answers      → ProxyOutcome::Relayed     → status + body verbatim
//!     → transport error       → ProxyOutcome::Unreachable → 502 JSON (error.rs)
//! ```
//!
//! # Design Decisions
//! - Opaque pass-through: the JSON is never parsed
//! - Upstream 4xx/5xx are relayed, not treated as proxy failures
//! - No retries, no connection reuse, no caching

pub mod compile;
pub mod error;

pub use compile::{CompileProxy, ProxyOutcome};
pub use error::{GatewayErrorBody, UpstreamError, UNREACHABLE_PREFIX};
