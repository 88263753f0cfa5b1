//! In-memory navigation history.
//!
//! # Responsibilities
//! - Hold the current path (the navigation location)
//! - Record pushed entries and support back/forward traversal
//! - Bound the number of retained entries
//!
//! # Design Decisions
//! - Never synced to an address bar and never persisted
//! - Push discards forward entries, like a browser stack
//! - Oldest entries are dropped once `max_entries` is exceeded

use serde::Serialize;

/// Default upper bound on retained history entries.
pub const DEFAULT_MAX_ENTRIES: usize = 50;

/// How the current location was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationKind {
    /// New entry appended after the cursor.
    Push,
    /// Current entry overwritten.
    Replace,
    /// Cursor moved by back/forward/go.
    Traverse,
}

impl NavigationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationKind::Push => "push",
            NavigationKind::Replace => "replace",
            NavigationKind::Traverse => "traverse",
        }
    }
}

/// Process-local history stack with a cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
    max_entries: usize,
}

impl MemoryHistory {
    /// Create a history holding a single entry. `max_entries` is clamped to at least 1.
    pub fn new(initial_path: impl Into<String>, max_entries: usize) -> Self {
        Self {
            entries: vec![initial_path.into()],
            cursor: 0,
            max_entries: max_entries.max(1),
        }
    }

    /// The current navigation location.
    pub fn location(&self) -> &str {
        &self.entries[self.cursor]
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Append an entry after the cursor, discarding any forward entries.
    pub fn push(&mut self, path: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path.into());

        if self.entries.len() > self.max_entries {
            let excess = self.entries.len() - self.max_entries;
            self.entries.drain(..excess);
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Overwrite the current entry.
    pub fn replace(&mut self, path: impl Into<String>) {
        self.entries[self.cursor] = path.into();
    }

    /// Path `delta` entries away from the cursor, if it exists.
    pub fn peek(&self, delta: isize) -> Option<&str> {
        self.target(delta).map(|i| self.entries[i].as_str())
    }

    /// Move the cursor by `delta`. Returns false and stays put when out of range.
    pub fn go(&mut self, delta: isize) -> bool {
        match self.target(delta) {
            Some(i) => {
                self.cursor = i;
                true
            }
            None => false,
        }
    }

    pub fn back(&mut self) -> bool {
        self.go(-1)
    }

    pub fn forward(&mut self) -> bool {
        self.go(1)
    }

    fn target(&self, delta: isize) -> Option<usize> {
        if delta == 0 {
            return None;
        }
        let target = self.cursor.checked_add_signed(delta)?;
        (target < self.entries.len()).then_some(target)
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/", DEFAULT_MAX_ENTRIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_initial_path() {
        let history = MemoryHistory::default();
        assert_eq!(history.location(), "/");
        assert_eq!(history.len(), 1);
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_push_and_traverse() {
        let mut history = MemoryHistory::default();
        history.push("/rhythm");
        assert_eq!(history.location(), "/rhythm");
        assert!(history.can_go_back());

        assert!(history.back());
        assert_eq!(history.location(), "/");
        assert!(history.can_go_forward());

        assert!(history.forward());
        assert_eq!(history.location(), "/rhythm");
        assert!(!history.forward());
        assert_eq!(history.location(), "/rhythm");
    }

    #[test]
    fn test_push_discards_forward_entries() {
        let mut history = MemoryHistory::default();
        history.push("/a");
        history.push("/b");
        history.back();
        history.back();
        history.push("/c");

        assert_eq!(history.entries(), &["/".to_string(), "/c".to_string()]);
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_replace_keeps_length() {
        let mut history = MemoryHistory::default();
        history.push("/a");
        history.replace("/b");
        assert_eq!(history.len(), 2);
        assert_eq!(history.location(), "/b");
        assert!(history.back());
        assert_eq!(history.location(), "/");
    }

    #[test]
    fn test_bounded_entries() {
        let mut history = MemoryHistory::new("/", 3);
        for path in ["/a", "/b", "/c", "/d"] {
            history.push(path);
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.entries()[0], "/b");
        assert_eq!(history.location(), "/d");
        assert_eq!(history.cursor(), 2);
    }

    #[test]
    fn test_go_out_of_range() {
        let mut history = MemoryHistory::default();
        history.push("/a");
        assert!(!history.go(-5));
        assert!(!history.go(3));
        assert!(!history.go(0));
        assert_eq!(history.location(), "/a");
        assert_eq!(history.peek(-1), Some("/"));
        assert_eq!(history.peek(1), None);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut history = MemoryHistory::new("/", 0);
        history.push("/a");
        assert_eq!(history.max_entries(), 1);
        assert_eq!(history.entries(), &["/a".to_string()]);
    }
}
