//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Detect duplicate and non-static route paths
//! - Check the host element id and history bounds
//! - Check that the initial location resolves to a route
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ShellConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::ShellConfig;
use crate::routing::table::validate_path;
use crate::routing::RouteError;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("routes[{index}]: {source}")]
    Route { index: usize, source: RouteError },

    #[error("shell.host_element must not be empty")]
    EmptyHostElement,

    #[error("shell.host_element {0:?} must not contain whitespace")]
    InvalidHostElement(String),

    #[error("history.max_entries must be at least 1")]
    ZeroHistoryCapacity,

    #[error("history.initial_path {0:?} does not match any route")]
    UnroutedInitialPath(String),
}

/// Check `config` and collect every problem found.
pub fn validate_config(config: &ShellConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, route) in config.routes.iter().enumerate() {
        if let Err(source) = validate_path(&route.path) {
            errors.push(ValidationError::Route { index, source });
        } else if !seen.insert(route.path.as_str()) {
            errors.push(ValidationError::Route {
                index,
                source: RouteError::DuplicatePath {
                    path: route.path.clone(),
                },
            });
        }
    }

    let host = &config.shell.host_element;
    if host.is_empty() {
        errors.push(ValidationError::EmptyHostElement);
    } else if host.chars().any(char::is_whitespace) {
        errors.push(ValidationError::InvalidHostElement(host.clone()));
    }

    if config.history.max_entries == 0 {
        errors.push(ValidationError::ZeroHistoryCapacity);
    }

    if !seen.contains(config.history.initial_path.as_str()) {
        errors.push(ValidationError::UnroutedInitialPath(
            config.history.initial_path.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RouteConfig;
    use crate::view::ViewKind;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&ShellConfig::default()), Ok(()));
    }

    #[test]
    fn test_duplicate_route() {
        let mut config = ShellConfig::default();
        config.routes.push(RouteConfig {
            path: "/rhythm".into(),
            view: ViewKind::Home,
        });

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::Route {
                index: 2,
                source: RouteError::DuplicatePath {
                    path: "/rhythm".into()
                },
            }]
        );
        assert_eq!(errors[0].to_string(), "routes[2]: duplicate route path: /rhythm");
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ShellConfig::default();
        config.shell.host_element = String::new();
        config.history.max_entries = 0;
        config.history.initial_path = "/home".into();
        config.routes.push(RouteConfig {
            path: "users/:id".into(),
            view: ViewKind::Home,
        });

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::EmptyHostElement));
        assert!(errors.contains(&ValidationError::ZeroHistoryCapacity));
        assert!(errors.contains(&ValidationError::UnroutedInitialPath("/home".into())));
        assert!(matches!(
            errors[0],
            ValidationError::Route {
                index: 2,
                source: RouteError::InvalidPath { .. }
            }
        ));
    }

    #[test]
    fn test_host_element_whitespace() {
        let mut config = ShellConfig::default();
        config.shell.host_element = "my app".into();
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::InvalidHostElement("my app".into())])
        );
    }

    #[test]
    fn test_empty_routes_fail_initial_path() {
        let mut config = ShellConfig::default();
        config.routes.clear();
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::UnroutedInitialPath("/".into())])
        );
    }
}
