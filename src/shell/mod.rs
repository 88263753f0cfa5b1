//! Application shell subsystem.
//!
//! # Data Flow
//! ```text
//! Application::initialize()
//!     → use_router(Router)
//!     → mount(&mut Document, host_id)
//!         → check router, host element, ownership
//!         → attach to host element
//!         → resolve initial location, render into route slot
//!     → MountedApp (navigate / replace / back / forward)
//!         → router.rs updates location
//!         → re-render route slot
//! ```
//!
//! # Design Decisions
//! - No process-wide singleton; each instance is an owned handle
//! - The mounted app holds the only mutable borrow of the document,
//!   so navigation writes are serialized by construction

pub mod app;
pub mod document;
pub mod error;

pub use app::{AppSnapshot, Application, MountedApp};
pub use document::{Document, Element};
pub use error::{DocumentError, MountError};
