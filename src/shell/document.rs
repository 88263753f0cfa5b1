//! Host document model.
//!
//! # Responsibilities
//! - Hold the elements of the surrounding page, addressable by id
//! - Record which application owns each element
//! - Receive rendered markup from the mounted application
//!
//! # Design Decisions
//! - Ids are unique; insertion order is kept for rendering
//! - Only the shell can attach to or render into an element

use serde::Serialize;
use uuid::Uuid;

use crate::shell::DocumentError;

/// A single addressable element in the host document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    id: String,
    content: String,
    render_count: u64,
    mounted_app: Option<Uuid>,
}

impl Element {
    fn new(id: String) -> Self {
        Self {
            id,
            content: String::new(),
            render_count: 0,
            mounted_app: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Markup last rendered into this element.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// How many times this element has been rendered into.
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// Id of the application attached to this element, if any.
    pub fn mounted_app(&self) -> Option<Uuid> {
        self.mounted_app
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted_app.is_some()
    }

    pub(crate) fn attach(&mut self, app_id: Uuid) {
        self.mounted_app = Some(app_id);
    }

    pub(crate) fn render(&mut self, markup: String) {
        self.content = markup;
        self.render_count += 1;
    }
}

/// The page the application is mounted into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    /// An empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// A document holding a single empty element with `id`.
    pub fn with_host(id: impl Into<String>) -> Self {
        Self {
            elements: vec![Element::new(id.into())],
        }
    }

    /// Builder form of [`Document::add_element`].
    pub fn with_element(mut self, id: impl Into<String>) -> Result<Self, DocumentError> {
        self.add_element(id)?;
        Ok(self)
    }

    pub fn add_element(&mut self, id: impl Into<String>) -> Result<(), DocumentError> {
        let id = id.into();
        if self.element(&id).is_some() {
            return Err(DocumentError::DuplicateElement { id });
        }
        self.elements.push(Element::new(id));
        Ok(())
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub(crate) fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Markup for the whole document, elements in insertion order.
    pub fn render(&self) -> String {
        self.elements
            .iter()
            .map(|e| format!(r#"<div id="{}">{}</div>"#, e.id, e.content))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
