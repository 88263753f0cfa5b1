//! Metrics collection.
//!
//! # Metrics
//! - `shell_navigations_total` (counter): successful navigations by kind
//! - `shell_unmatched_navigations_total` (counter): rejected navigations
//! - `shell_renders_total` (counter): renders into the host element by view
//! - `shell_mounts_total` (counter): applications attached to a host

use metrics::counter;

use crate::routing::NavigationKind;

pub fn record_navigation(kind: NavigationKind) {
    counter!("shell_navigations_total", "kind" => kind.as_str()).increment(1);
}

pub fn record_unmatched() {
    counter!("shell_unmatched_navigations_total").increment(1);
}

pub fn record_render(view: &str) {
    counter!("shell_renders_total", "view" => view.to_string()).increment(1);
}

pub fn record_mount() {
    counter!("shell_mounts_total").increment(1);
}
