//! View modules rendered into the shell's route slot.
//!
//! # Design Decisions
//! - Views are opaque to the router: the only capability required is `render`
//! - `ViewKind` is the tag used by configuration files (`view = "home"`)
//! - Markup is plain text; styling and behaviour belong to the host page

pub mod home;
pub mod rhythm;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use home::HomeView;
pub use rhythm::RhythmView;

/// A unit that can be rendered into the delegated view slot.
pub trait Renderable: fmt::Debug {
    /// Short stable name used in logs and metric labels.
    fn name(&self) -> &str;

    /// Produce the markup for this view.
    fn render(&self) -> String;
}

/// The views known to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    /// Landing page listing the available exercises.
    Home,
    /// Rhythm exercise page.
    Rhythm,
}

impl ViewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::Home => "home",
            ViewKind::Rhythm => "rhythm",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Renderable for ViewKind {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn render(&self) -> String {
        match self {
            ViewKind::Home => HomeView.render(),
            ViewKind::Rhythm => RhythmView.render(),
        }
    }
}
