//! Shared utilities for integration testing.

use std::cell::Cell;
use std::rc::Rc;

use tempo_shell::routing::{RouteEntry, RouteTable, Router};
use tempo_shell::view::{Renderable, ViewKind};

/// Router over the stock two-route table.
pub fn default_router() -> Router {
    let table = RouteTable::new(vec![
        RouteEntry::new("/", ViewKind::Home),
        RouteEntry::new("/rhythm", ViewKind::Rhythm),
    ])
    .unwrap();
    Router::with_table(table)
}

/// A view that counts how often it has been rendered.
#[derive(Debug, Clone)]
pub struct CountingView {
    pub name: &'static str,
    pub renders: Rc<Cell<u32>>,
}

impl CountingView {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            renders: Rc::new(Cell::new(0)),
        }
    }

    pub fn count(&self) -> u32 {
        self.renders.get()
    }
}

impl Renderable for CountingView {
    fn name(&self) -> &str {
        self.name
    }

    fn render(&self) -> String {
        self.renders.set(self.renders.get() + 1);
        format!("<p>{}</p>", self.name)
    }
}
