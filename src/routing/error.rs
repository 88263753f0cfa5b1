//! Routing error definitions.

use thiserror::Error;

/// Errors produced while building the route table or resolving a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Two route entries share the same path.
    #[error("duplicate route path: {path}")]
    DuplicatePath { path: String },

    /// A route path is not a static absolute path.
    #[error("invalid route path {path:?}: {reason}")]
    InvalidPath { path: String, reason: &'static str },

    /// No route entry matches the requested path.
    #[error("no route matched path {path:?}")]
    NoRouteMatched { path: String },

    /// Navigation was attempted before the initial location was resolved.
    #[error("router has not resolved its initial location")]
    Unresolved,
}

impl RouteError {
    /// Configuration errors abort startup; resolution errors do not.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            RouteError::DuplicatePath { .. } | RouteError::InvalidPath { .. }
        )
    }
}
