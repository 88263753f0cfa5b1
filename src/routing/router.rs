//! Route lookup and navigation.
//!
//! # Responsibilities
//! - Own the route table and the in-memory history
//! - Resolve paths to views by exact match
//! - Track the currently resolved view
//!
//! # Design Decisions
//! - `resolve` is pure; only `navigate`/`replace`/`go` change state
//! - A path is resolved before it is recorded, so history never holds
//!   an unmatched entry
//! - Explicit NoRouteMatched rather than a silent default

use crate::observability::metrics;
use crate::routing::{MemoryHistory, NavigationKind, RouteError, RouteTable};
use crate::view::{Renderable, ViewKind};

/// Router lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterState<V> {
    /// Nothing has been resolved yet (before mount).
    Unresolved,
    /// The view for the current location.
    Resolved(V),
}

/// Client-side router backed by an in-memory history.
#[derive(Debug, Clone)]
pub struct Router<V = ViewKind> {
    table: RouteTable<V>,
    history: MemoryHistory,
    state: RouterState<V>,
}

impl<V> Router<V>
where
    V: Renderable + Clone,
{
    /// Create a router over `table`, starting at the history's current location.
    pub fn new(table: RouteTable<V>, history: MemoryHistory) -> Self {
        Self {
            table,
            history,
            state: RouterState::Unresolved,
        }
    }

    /// Create a router starting at `/` with default history bounds.
    pub fn with_table(table: RouteTable<V>) -> Self {
        Self::new(table, MemoryHistory::default())
    }

    /// Look up the view registered for `path`.
    pub fn resolve(&self, path: &str) -> Result<&V, RouteError> {
        self.table
            .get(path)
            .map(|entry| entry.view())
            .ok_or_else(|| RouteError::NoRouteMatched {
                path: path.to_string(),
            })
    }

    /// Resolve the current location and enter the `Resolved` state.
    ///
    /// Every entry already in the history must match a route, otherwise
    /// traversal could land on an unreachable location.
    pub fn resolve_initial(&mut self) -> Result<(), RouteError> {
        let stale = self
            .history
            .entries()
            .iter()
            .find(|p| !self.table.contains(p.as_str()));
        if let Some(stale) = stale {
            tracing::error!(path = %stale, "History holds an entry with no route");
            return Err(RouteError::NoRouteMatched {
                path: stale.clone(),
            });
        }

        let view = self.resolve_or_report(self.history.location())?.clone();
        tracing::debug!(
            path = %self.history.location(),
            view = %view.name(),
            "Initial route resolved"
        );
        self.state = RouterState::Resolved(view);
        Ok(())
    }

    /// Push `path` onto the history and resolve it.
    ///
    /// Returns `Ok(false)` when `path` is already the current location.
    /// On error nothing changes.
    pub fn navigate(&mut self, path: &str) -> Result<bool, RouteError> {
        self.ensure_resolved()?;
        let view = self.resolve_or_report(path)?.clone();

        if self.history.location() == path {
            tracing::debug!(path = %path, "Already at location, skipping navigation");
            return Ok(false);
        }

        self.history.push(path);
        self.commit(view, NavigationKind::Push);
        Ok(true)
    }

    /// Replace the current history entry with `path` and resolve it.
    pub fn replace(&mut self, path: &str) -> Result<bool, RouteError> {
        self.ensure_resolved()?;
        let view = self.resolve_or_report(path)?.clone();

        if self.history.location() == path {
            return Ok(false);
        }

        self.history.replace(path);
        self.commit(view, NavigationKind::Replace);
        Ok(true)
    }

    /// Move `delta` entries through the history.
    ///
    /// Returns `Ok(false)` when the target is out of range.
    pub fn go(&mut self, delta: isize) -> Result<bool, RouteError> {
        self.ensure_resolved()?;
        let Some(target) = self.history.peek(delta) else {
            tracing::debug!(
                delta,
                cursor = self.history.cursor(),
                "History traversal out of range"
            );
            return Ok(false);
        };
        let view = self.resolve_or_report(target)?.clone();

        self.history.go(delta);
        self.commit(view, NavigationKind::Traverse);
        Ok(true)
    }

    pub fn back(&mut self) -> Result<bool, RouteError> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Result<bool, RouteError> {
        self.go(1)
    }

    /// The current navigation location.
    pub fn location(&self) -> &str {
        self.history.location()
    }

    pub fn current_view(&self) -> Option<&V> {
        match &self.state {
            RouterState::Resolved(view) => Some(view),
            RouterState::Unresolved => None,
        }
    }

    pub fn state(&self) -> &RouterState<V> {
        &self.state
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.state, RouterState::Resolved(_))
    }

    pub fn history(&self) -> &MemoryHistory {
        &self.history
    }

    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }

    fn ensure_resolved(&self) -> Result<(), RouteError> {
        if self.is_resolved() {
            Ok(())
        } else {
            tracing::warn!(
                location = %self.history.location(),
                "Navigation before initial resolution"
            );
            Err(RouteError::Unresolved)
        }
    }

    fn resolve_or_report(&self, path: &str) -> Result<&V, RouteError> {
        self.resolve(path).inspect_err(|e| {
            tracing::warn!(
                path = %path,
                location = %self.history.location(),
                error = %e,
                "Navigation rejected, keeping current view"
            );
            metrics::record_unmatched();
        })
    }

    fn commit(&mut self, view: V, kind: NavigationKind) {
        tracing::info!(
            path = %self.history.location(),
            view = %view.name(),
            kind = kind.as_str(),
            "Navigated"
        );
        metrics::record_navigation(kind);
        self.state = RouterState::Resolved(view);
    }
}
