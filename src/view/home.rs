//! Landing page view.

use crate::view::Renderable;

/// Default view mounted at `/`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HomeView;

impl Renderable for HomeView {
    fn name(&self) -> &str {
        "home"
    }

    fn render(&self) -> String {
        concat!(
            r#"<section class="home">"#,
            "<h1>Tempo</h1>",
            r#"<nav><a href="/rhythm">Rhythm</a></nav>"#,
            "</section>",
        )
        .to_string()
    }
}
