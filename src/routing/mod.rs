//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (ordered route lookup)
//!     → matcher.rs (evaluate match conditions)
//!     → Return: RouteTarget (Preflight | Compile | Static)
//! ```
//!
//! # Design Decisions
//! - Route table built once at startup, immutable at runtime
//! - Deterministic: same input always resolves to the same target
//! - Static is the fallback, so every request has exactly one handler

pub mod matcher;
pub mod router;

pub use router::{Route, RouteTarget, Router, COMPILE_PATH};
