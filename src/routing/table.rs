//! Route table construction and lookup.
//!
//! # Responsibilities
//! - Pair static paths with views
//! - Reject duplicate and non-static paths at construction
//! - O(1) exact lookup by path
//!
//! # Design Decisions
//! - Insertion order is preserved for iteration and diagnostics
//! - Lookup goes through a HashMap index; order never affects resolution
//!   since every path is unique

use std::collections::HashMap;

use crate::config::RouteConfig;
use crate::routing::RouteError;
use crate::view::ViewKind;

/// Characters that would make a path a pattern rather than a literal.
const RESERVED_CHARS: [char; 4] = [':', '*', '?', '#'];

/// A single path → view pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry<V = ViewKind> {
    path: String,
    view: V,
}

impl<V> RouteEntry<V> {
    pub fn new(path: impl Into<String>, view: V) -> Self {
        Self {
            path: path.into(),
            view,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

/// Immutable, ordered set of routes with unique paths.
#[derive(Debug, Clone)]
pub struct RouteTable<V = ViewKind> {
    entries: Vec<RouteEntry<V>>,
    index: HashMap<String, usize>,
}

impl<V> RouteTable<V> {
    /// Build a table from entries, failing on the first invalid or repeated path.
    pub fn new(entries: Vec<RouteEntry<V>>) -> Result<Self, RouteError> {
        let mut index = HashMap::with_capacity(entries.len());

        for (i, entry) in entries.iter().enumerate() {
            validate_path(&entry.path)?;
            if index.insert(entry.path.clone(), i).is_some() {
                return Err(RouteError::DuplicatePath {
                    path: entry.path.clone(),
                });
            }
        }

        Ok(Self { entries, index })
    }

    /// Exact-match lookup.
    pub fn get(&self, path: &str) -> Option<&RouteEntry<V>> {
        self.index.get(path).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry<V>> {
        self.entries.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.path.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RouteTable<ViewKind> {
    /// Build the table from configured routes.
    pub fn from_config(routes: &[RouteConfig]) -> Result<Self, RouteError> {
        Self::new(
            routes
                .iter()
                .map(|r| RouteEntry::new(r.path.clone(), r.view))
                .collect(),
        )
    }
}

/// Check that a path is a static absolute path.
pub fn validate_path(path: &str) -> Result<(), RouteError> {
    let invalid = |reason| RouteError::InvalidPath {
        path: path.to_string(),
        reason,
    };

    if !path.starts_with('/') {
        return Err(invalid("must start with '/'"));
    }
    if path.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain whitespace"));
    }
    if path.contains(RESERVED_CHARS) {
        return Err(invalid("parameters, wildcards, queries and fragments are not supported"));
    }
    Ok(())
}
