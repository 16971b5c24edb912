//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields
//!     → logging.rs (fmt subscriber, EnvFilter)
//!     → stdout
//! ```
//!
//! # Design Decisions
//! - Structured fields (status, bytes, path) rather than formatted strings
//! - Log lines carry no behavioral contract

pub mod logging;

pub use logging::init_logging;
