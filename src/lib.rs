//! CodeShell gateway library.
//!
//! A small local HTTP server for the CodeShell code widget: it serves the
//! widget's static files and forwards compile jobs to Wandbox.
//!
//! ```text
//!     Browser widget
//!          │
//!          ▼
//!   ┌──────────────┐   OPTIONS *        ┌──────────────┐
//!   │   routing    │──────────────────▶ │ 204 preflight│
//!   │   router     │   POST /compile    ├──────────────┤      HTTPS
//!   │              │──────────────────▶ │ proxy        │ ───────────▶ Wandbox
//!   │              │   anything else    ├──────────────┤
//!   │              │──────────────────▶ │ static_files │ ───▶ base dir
//!   └──────────────┘                    └──────────────┘
//!          │  security::headers adds CORS to every response
//!          ▼
//!       Response
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod routing;

// Handlers
pub mod proxy;
pub mod static_files;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::{start, ServerHandle, Shutdown};
