//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation request (path)
//!     → router.rs (exact lookup in the route table)
//!     → history.rs (record entry in the in-memory stack)
//!     → Return: resolved view or explicit NoRouteMatched
//!
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → table.rs (validate paths, reject duplicates)
//!     → Freeze as immutable RouteTable
//!     → Move into Router
//! ```
//!
//! # Design Decisions
//! - Table built at startup, immutable at runtime
//! - Exact string matching only (no parameters, no wildcards)
//! - Deterministic: same path always resolves to the same view
//! - History lives only in process memory; nothing touches an address bar
//! - Unmatched navigation is an error for that call only; router state is kept

pub mod error;
pub mod history;
pub mod router;
pub mod table;

pub use error::RouteError;
pub use history::{MemoryHistory, NavigationKind};
pub use router::{Router, RouterState};
pub use table::{RouteEntry, RouteTable};
