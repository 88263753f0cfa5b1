//! Client application shell with in-memory routing.

pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod shell;
pub mod view;

pub use config::schema::ShellConfig;
pub use routing::Router;
pub use shell::{Application, Document, MountedApp};
