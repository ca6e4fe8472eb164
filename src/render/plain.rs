//! Renderer that strips all styling

use super::{markup, StyleRenderer};

/// Removes markup and keeps the text; for pipes, files and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl StyleRenderer for PlainRenderer {
    fn render(&self, args: &[String]) -> Vec<String> {
        args.iter().map(|arg| markup::strip(arg)).collect()
    }

    fn name(&self) -> &str {
        "plain"
    }
}
