//! Rhythm exercise view.

use crate::view::Renderable;

/// Secondary view mounted at `/rhythm`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RhythmView;

impl Renderable for RhythmView {
    fn name(&self) -> &str {
        "rhythm"
    }

    fn render(&self) -> String {
        concat!(
            r#"<section class="rhythm">"#,
            "<h1>Rhythm</h1>",
            r#"<nav><a href="/">Back</a></nav>"#,
            "</section>",
        )
        .to_string()
    }
}
