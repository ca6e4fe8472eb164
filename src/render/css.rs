//! Renderer producing browser-console `%c` format arguments

use super::{markup, StyleRenderer};

/// Rewrites each styled region as `%c<text>%c` and appends the matching CSS
/// strings after the rendered arguments: the region's declarations for the
/// opening marker and an empty string for the closing one.
///
/// The output is meant for consoles that understand `%c` substitution; on a
/// terminal it prints the CSS verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssRenderer;

impl StyleRenderer for CssRenderer {
    fn render(&self, args: &[String]) -> Vec<String> {
        let mut styles = Vec::new();
        let mut rendered: Vec<String> = args
            .iter()
            .map(|arg| {
                let mut out = String::with_capacity(arg.len());
                for segment in markup::parse(arg) {
                    match segment.css {
                        Some(css) => {
                            out.push_str("%c");
                            out.push_str(segment.text);
                            out.push_str("%c");
                            styles.push(css.to_string());
                            styles.push(String::new());
                        }
                        None => out.push_str(segment.text),
                    }
                }
                out
            })
            .collect();
        rendered.extend(styles);
        rendered
    }

    fn name(&self) -> &str {
        "css"
    }
}
