//! Application root and mount lifecycle.
//!
//! # Responsibilities
//! - Create independent application instances
//! - Attach a router and mount into a single host element
//! - Re-render the route slot after each successful navigation
//!
//! # Design Decisions
//! - `mount` consumes the `Application`, so an instance mounts at most once
//! - Every mount check runs before the document is touched
//! - The initial render happens strictly after the host element is attached

use serde::Serialize;
use uuid::Uuid;

use crate::observability::metrics;
use crate::routing::{MemoryHistory, RouteError, Router};
use crate::shell::{Document, MountError};
use crate::view::{Renderable, ViewKind};

/// An application that has not been mounted yet.
#[derive(Debug)]
#[must_use]
pub struct Application<V = ViewKind> {
    id: Uuid,
    router: Option<Router<V>>,
}

impl<V> Application<V>
where
    V: Renderable + Clone,
{
    /// Create a fresh application instance.
    pub fn initialize() -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(app_id = %id, "Application initialized");
        Self { id, router: None }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn has_router(&self) -> bool {
        self.router.is_some()
    }

    /// Attach the router. A second call replaces the first router.
    pub fn use_router(mut self, router: Router<V>) -> Self {
        if self.router.is_some() {
            tracing::warn!(app_id = %self.id, "Replacing previously attached router");
        }
        tracing::debug!(app_id = %self.id, routes = router.table().len(), "Router attached");
        self.router = Some(router);
        self
    }

    /// Attach to the element `host_id` in `document` and render the initial route.
    ///
    /// On error the document is left untouched.
    pub fn mount<'d>(
        self,
        document: &'d mut Document,
        host_id: &str,
    ) -> Result<MountedApp<'d, V>, MountError> {
        let id = self.id;
        let Some(mut router) = self.router else {
            tracing::error!(app_id = %id, "Mount attempted without a router");
            return Err(MountError::RouterMissing);
        };

        let Some(element) = document.element_mut(host_id) else {
            tracing::error!(app_id = %id, host = %host_id, "Mount target not found");
            return Err(MountError::MountTargetMissing {
                id: host_id.to_string(),
            });
        };

        if let Some(owner) = element.mounted_app() {
            tracing::error!(
                app_id = %id,
                host = %host_id,
                owner = %owner,
                "Host element already mounted"
            );
            return Err(MountError::HostAlreadyMounted {
                id: host_id.to_string(),
                owner,
            });
        }

        router.resolve_initial().map_err(MountError::InitialRoute)?;
        element.attach(id);

        let mut app = MountedApp {
            id,
            host_id: host_id.to_string(),
            router,
            document,
        };
        app.render();

        metrics::record_mount();
        tracing::info!(
            app_id = %id,
            host = %host_id,
            location = %app.location(),
            "Application mounted"
        );
        Ok(app)
    }
}

/// An application attached to its host element.
#[derive(Debug)]
pub struct MountedApp<'d, V = ViewKind> {
    id: Uuid,
    host_id: String,
    router: Router<V>,
    document: &'d mut Document,
}

impl<V> MountedApp<'_, V>
where
    V: Renderable + Clone,
{
    /// Push `path` and re-render. On error the current view stays in place.
    pub fn navigate(&mut self, path: &str) -> Result<(), RouteError> {
        if self.router.navigate(path)? {
            self.render();
        }
        Ok(())
    }

    /// Alias for [`MountedApp::navigate`].
    pub fn push(&mut self, path: &str) -> Result<(), RouteError> {
        self.navigate(path)
    }

    pub fn replace(&mut self, path: &str) -> Result<(), RouteError> {
        if self.router.replace(path)? {
            self.render();
        }
        Ok(())
    }

    /// Traverse the history; returns whether the location changed.
    pub fn go(&mut self, delta: isize) -> Result<bool, RouteError> {
        let moved = self.router.go(delta)?;
        if moved {
            self.render();
        }
        Ok(moved)
    }

    pub fn back(&mut self) -> Result<bool, RouteError> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Result<bool, RouteError> {
        self.go(1)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn host_id(&self) -> &str {
        &self.host_id
    }

    pub fn location(&self) -> &str {
        self.router.location()
    }

    pub fn current_view(&self) -> Option<&V> {
        self.router.current_view()
    }

    pub fn router(&self) -> &Router<V> {
        &self.router
    }

    pub fn history(&self) -> &MemoryHistory {
        self.router.history()
    }

    pub fn document(&self) -> &Document {
        &*self.document
    }

    /// Serializable view of the current state.
    pub fn snapshot(&self) -> AppSnapshot<'_> {
        AppSnapshot {
            app_id: self.id,
            host_element: &self.host_id,
            location: self.router.location(),
            history: self.router.history(),
            document: &*self.document,
        }
    }

    fn render(&mut self) {
        let Some(view) = self.router.current_view() else {
            return;
        };
        let location = self.router.location();
        let markup = format!(r#"<div data-route="{}">{}</div>"#, location, view.render());

        // Documents have no removal API, so the attached host is always present.
        let Some(element) = self.document.element_mut(&self.host_id) else {
            debug_assert!(false, "mounted host element #{} missing", self.host_id);
            return;
        };
        element.render(markup);

        metrics::record_render(view.name());
        tracing::debug!(
            app_id = %self.id,
            path = %location,
            view = %view.name(),
            render_count = element.render_count(),
            "Rendered route slot"
        );
    }
}

/// Point-in-time state of a mounted application.
#[derive(Debug, Serialize)]
pub struct AppSnapshot<'a> {
    pub app_id: Uuid,
    pub host_element: &'a str,
    pub location: &'a str,
    pub history: &'a MemoryHistory,
    pub document: &'a Document,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{RouteEntry, RouteTable};

    fn router() -> Router {
        let table = RouteTable::new(vec![
            RouteEntry::new("/", ViewKind::Home),
            RouteEntry::new("/rhythm", ViewKind::Rhythm),
        ])
        .unwrap();
        Router::with_table(table)
    }

    #[test]
    fn test_instances_are_independent() {
        let a = Application::<ViewKind>::initialize();
        let b = Application::<ViewKind>::initialize();
        assert_ne!(a.id(), b.id());
        assert!(!a.has_router());
    }

    #[test]
    fn test_mount_renders_default_view_once() {
        let mut doc = Document::with_host("app");
        let app = Application::initialize().use_router(router());
        let id = app.id();

        let mounted = app.mount(&mut doc, "app").unwrap();
        assert_eq!(mounted.location(), "/");
        assert_eq!(mounted.current_view(), Some(&ViewKind::Home));

        let element = mounted.document().element("app").unwrap();
        assert_eq!(element.render_count(), 1);
        assert_eq!(element.mounted_app(), Some(id));
        assert!(element.content().starts_with(r#"<div data-route="/">"#));
    }

    #[test]
    fn test_mount_without_router() {
        let mut doc = Document::with_host("app");
        let err = Application::<ViewKind>::initialize()
            .mount(&mut doc, "app")
            .unwrap_err();
        assert_eq!(err, MountError::RouterMissing);
        assert_eq!(doc, Document::with_host("app"));
    }

    #[test]
    fn test_mount_missing_target_leaves_document_untouched() {
        let mut doc = Document::with_host("root");
        let err = Application::initialize()
            .use_router(router())
            .mount(&mut doc, "app")
            .unwrap_err();
        assert_eq!(err, MountError::MountTargetMissing { id: "app".into() });
        assert_eq!(doc, Document::with_host("root"));
    }

    #[test]
    fn test_unresolvable_initial_route() {
        let table = RouteTable::new(vec![RouteEntry::new("/rhythm", ViewKind::Rhythm)]).unwrap();
        let mut doc = Document::with_host("app");
        let err = Application::initialize()
            .use_router(Router::with_table(table))
            .mount(&mut doc, "app")
            .unwrap_err();
        assert!(matches!(err, MountError::InitialRoute(RouteError::NoRouteMatched { .. })));
        assert!(!doc.element("app").unwrap().is_mounted());
    }

    #[test]
    fn test_navigation_rerenders() {
        let mut doc = Document::with_host("app");
        let mut app = Application::initialize()
            .use_router(router())
            .mount(&mut doc, "app")
            .unwrap();

        app.navigate("/rhythm").unwrap();
        app.navigate("/rhythm").unwrap();
        assert!(app.navigate("/missing").is_err());
        assert_eq!(app.back(), Ok(true));

        let element = app.document().element("app").unwrap();
        assert_eq!(element.render_count(), 3);
        let expected = format!(r#"<div data-route="/">{}</div>"#, ViewKind::Home.render());
        assert_eq!(element.content(), expected);
    }

    #[test]
    fn test_render_only_touches_host_element() {
        let mut doc = Document::with_host("app").with_element("sidebar").unwrap();
        let mut app = Application::initialize()
            .use_router(router())
            .mount(&mut doc, "app")
            .unwrap();
        app.navigate("/rhythm").unwrap();

        assert_eq!(app.document().element("app").unwrap().render_count(), 2);
        let sidebar = app.document().element("sidebar").unwrap();
        assert_eq!(sidebar.render_count(), 0);
        assert!(!sidebar.is_mounted());
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut doc = Document::with_host("app");
        let mut app = Application::initialize()
            .use_router(router())
            .mount(&mut doc, "app")
            .unwrap();
        app.navigate("/rhythm").unwrap();

        let json = serde_json::to_value(app.snapshot()).unwrap();
        assert_eq!(json["location"], "/rhythm");
        assert_eq!(json["host_element"], "app");
        assert_eq!(json["history"]["entries"], serde_json::json!(["/", "/rhythm"]));
        assert_eq!(json["document"]["elements"][0]["render_count"], 2);
    }
}
