//! Shell and document error definitions.

use thiserror::Error;
use uuid::Uuid;

use crate::routing::RouteError;

/// Errors that abort mounting. None of them leave a partial attach behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    /// No element with the requested id exists in the host document.
    #[error("mount target #{id} not found in host document")]
    MountTargetMissing { id: String },

    /// Another application already owns the host element.
    #[error("host element #{id} is already mounted by application {owner}")]
    HostAlreadyMounted { id: String, owner: Uuid },

    /// `mount` was called before a router was attached.
    #[error("no router attached to application")]
    RouterMissing,

    /// The initial location does not resolve to a route.
    #[error("initial route failed: {0}")]
    InitialRoute(#[source] RouteError),
}

/// Errors raised while building a host document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("element #{id} already exists")]
    DuplicateElement { id: String },
}
