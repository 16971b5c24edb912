//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → limits.rs (cap buffered compile body, 413 on overflow)
//!     → handler
//! Outgoing response:
//!     → headers.rs (CORS headers on every response)
//! ```
//!
//! # Design Decisions
//! - No authentication or rate limiting: the gateway is a local dev tool
//! - Static paths are confined to the static root (see static_files)

pub mod headers;
pub mod limits;

pub use headers::with_cors;
pub use limits::body_limit;
