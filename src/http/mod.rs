//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → routing (OPTIONS | POST /compile | everything else)
//!     → preflight 204 / proxy::CompileProxy / static_files::StaticFiles
//!     → security::headers (CORS on the way out)
//!     → Send to client
//! ```

pub mod server;

pub use server::{AppState, HttpServer};
