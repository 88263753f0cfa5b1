//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validate config → Build route table → Build router
//!     → Initialize application → Attach router → Mount
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then routing, then the shell
//! - Any startup error is fatal and returned to the caller
//! - No teardown: a mounted application lives until the process ends

pub mod startup;

pub use startup::{bootstrap, build_router, StartupError};
