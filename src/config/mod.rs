//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → CLI overrides applied in main
//!     → handed to lifecycle::start
//! ```
//!
//! # Design Decisions
//! - Config is immutable once the server starts
//! - All fields have defaults; without a file the gateway behaves as the
//!   stock CodeShell server (port 3000, Wandbox upstream)
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    GatewayConfig, LimitsConfig, ListenerConfig, ObservabilityConfig, StaticFilesConfig,
    UpstreamConfig,
};
pub use validation::{validate_config, ValidationError};
