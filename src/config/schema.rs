//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the shell.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::observability::logging::DEFAULT_FILTER;
use crate::routing::history::DEFAULT_MAX_ENTRIES;
use crate::view::ViewKind;

/// Root configuration for the application shell.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Host element settings.
    pub shell: MountConfig,

    /// In-memory history settings.
    pub history: HistoryConfig,

    /// Route definitions mapping paths to views.
    pub routes: Vec<RouteConfig>,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            shell: MountConfig::default(),
            history: HistoryConfig::default(),
            routes: vec![
                RouteConfig {
                    path: "/".to_string(),
                    view: ViewKind::Home,
                },
                RouteConfig {
                    path: "/rhythm".to_string(),
                    view: ViewKind::Rhythm,
                },
            ],
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Where the application is attached in the host document.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MountConfig {
    /// Id of the host element (e.g., "app").
    pub host_element: String,
}

impl Default for MountConfig {
    fn default() -> Self {
        Self {
            host_element: "app".to_string(),
        }
    }
}

/// In-memory history configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Location resolved when the application mounts.
    pub initial_path: String,

    /// Maximum retained history entries.
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            initial_path: "/".to_string(),
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

/// A single route entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Exact path to match.
    pub path: String,

    /// View rendered for this path.
    pub view: ViewKind,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_FILTER.to_string(),
        }
    }
}
