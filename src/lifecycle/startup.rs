//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration
//! - Build the route table and router in dependency order
//! - Initialize the application and mount it into the host document
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Mount happens last (rendering only when routing is ready)

use thiserror::Error;

use crate::config::{validate_config, ShellConfig, ValidationError};
use crate::routing::{MemoryHistory, RouteError, RouteTable, Router};
use crate::shell::{Application, Document, MountError, MountedApp};

/// Errors that abort application startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    #[error("route table: {0}")]
    Route(#[from] RouteError),

    #[error("mount: {0}")]
    Mount(#[from] MountError),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Build the router described by `config`.
pub fn build_router(config: &ShellConfig) -> Result<Router, RouteError> {
    let table = RouteTable::from_config(&config.routes)?;
    let history = MemoryHistory::new(
        config.history.initial_path.clone(),
        config.history.max_entries,
    );
    Ok(Router::new(table, history))
}

/// Run the full startup sequence and return the mounted application.
pub fn bootstrap<'d>(
    config: &ShellConfig,
    document: &'d mut Document,
) -> Result<MountedApp<'d>, StartupError> {
    validate_config(config).map_err(StartupError::Validation)?;

    let router = build_router(config)?;
    tracing::info!(
        routes = router.table().len(),
        initial_path = %router.location(),
        max_entries = router.history().max_entries(),
        "Route table compiled"
    );

    let app = Application::initialize().use_router(router);
    let mounted = app.mount(document, &config.shell.host_element)?;
    Ok(mounted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ViewKind;

    #[test]
    fn test_build_router_from_defaults() {
        let router = build_router(&ShellConfig::default()).unwrap();
        assert_eq!(router.table().len(), 2);
        assert_eq!(router.location(), "/");
        assert!(!router.is_resolved());
    }

    #[test]
    fn test_bootstrap_defaults() {
        let mut doc = Document::with_host("app");
        let app = bootstrap(&ShellConfig::default(), &mut doc).unwrap();
        assert_eq!(app.current_view(), Some(&ViewKind::Home));
        assert_eq!(app.host_id(), "app");
    }

    #[test]
    fn test_bootstrap_rejects_invalid_config() {
        let mut config = ShellConfig::default();
        config.routes.push(config.routes[0].clone());

        let mut doc = Document::with_host("app");
        let err = bootstrap(&config, &mut doc).unwrap_err();
        assert!(matches!(err, StartupError::Validation(ref errors) if errors.len() == 1));
        assert!(!doc.element("app").unwrap().is_mounted());
    }

    #[test]
    fn test_bootstrap_missing_host() {
        let mut doc = Document::with_host("root");
        let err = bootstrap(&ShellConfig::default(), &mut doc).unwrap_err();
        assert!(matches!(
            err,
            StartupError::Mount(MountError::MountTargetMissing { ref id }) if id == "app"
        ));
    }
}
