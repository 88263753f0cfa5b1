//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Router and shell produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (counters via the `metrics` facade)
//!
//! Consumers:
//!     → stderr (fmt subscriber, filtered by RUST_LOG or config)
//!     → whichever metrics recorder the embedding process installs
//! ```
//!
//! # Design Decisions
//! - Structured fields (path, view, app_id) on every navigation event
//! - No recorder is installed here; counters are no-ops until one is

pub mod logging;
pub mod metrics;
