//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validate config → Build server → Bind listener → Spawn serve loop
//!     → ServerHandle
//!
//! Shutdown (shutdown.rs):
//!     ServerHandle::stop → Stop accepting → Drain in-flight → Release socket
//!
//! Signals (signals.rs):
//!     SIGINT/SIGTERM → main calls ServerHandle::stop
//! ```
//!
//! # Design Decisions
//! - No process-global server: every start returns its own handle, so
//!   tests run several gateways side by side on port 0

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use signals::wait_for_signal;
pub use startup::{banner, start, ServerHandle, StartupError};
