//! Style renderers
//!
//! A renderer turns color-markup directives embedded in log arguments into
//! something a console understands. Rendering is a pure transform: renderers
//! never write output themselves.

#[cfg(feature = "console")]
pub mod ansi;
pub mod css;
pub mod markup;
pub mod plain;

#[cfg(feature = "console")]
pub use ansi::AnsiRenderer;
pub use css::CssRenderer;
pub use plain::PlainRenderer;

use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub trait StyleRenderer: Send + Sync {
    /// Render every argument, replacing markup with console styling
    fn render(&self, args: &[String]) -> Vec<String>;
    fn name(&self) -> &str;
}

/// Selects one of the built-in renderers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// ANSI escapes for terminals (plain text without the `console` feature)
    #[default]
    Ansi,
    /// Markup stripped
    Plain,
    /// Browser-console `%c` arguments
    Css,
}

impl RenderMode {
    pub fn renderer(&self) -> Arc<dyn StyleRenderer> {
        match self {
            #[cfg(feature = "console")]
            RenderMode::Ansi => Arc::new(AnsiRenderer),
            #[cfg(not(feature = "console"))]
            RenderMode::Ansi => Arc::new(PlainRenderer),
            RenderMode::Plain => Arc::new(PlainRenderer),
            RenderMode::Css => Arc::new(CssRenderer),
        }
    }
}
