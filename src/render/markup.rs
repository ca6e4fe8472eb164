//! Parser for the color-markup syntax
//!
//! `[c="color: red; font-weight: bold"]text[c]` marks `text` as a styled
//! region. Regions do not nest. An opening tag without a closing `[c]` styles
//! the rest of the string; an opening tag that is never terminated by `"]`
//! is kept as literal text.

use crate::core::style::{MARKUP_CLOSE, MARKUP_OPEN};

/// A run of text with the CSS declarations that apply to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub css: Option<&'a str>,
}

impl<'a> Segment<'a> {
    fn plain(text: &'a str) -> Self {
        Self { text, css: None }
    }

    fn styled(text: &'a str, css: &'a str) -> Self {
        Self {
            text,
            css: Some(css),
        }
    }
}

/// Split `input` into plain and styled segments, in order.
///
/// Empty plain runs are omitted; empty styled regions are kept so that
/// renderers emitting one style per region stay aligned.
pub fn parse(input: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = input;

    while let Some(open) = rest.find(MARKUP_OPEN) {
        let after_open = &rest[open + MARKUP_OPEN.len()..];
        let Some(css_end) = after_open.find("\"]") else {
            break;
        };

        if open > 0 {
            segments.push(Segment::plain(&rest[..open]));
        }

        let css = &after_open[..css_end];
        let body = &after_open[css_end + 2..];
        match body.find(MARKUP_CLOSE) {
            Some(close) => {
                segments.push(Segment::styled(&body[..close], css));
                rest = &body[close + MARKUP_CLOSE.len()..];
            }
            None => {
                segments.push(Segment::styled(body, css));
                rest = "";
            }
        }
    }

    if !rest.is_empty() {
        segments.push(Segment::plain(rest));
    }
    segments
}

/// Split a CSS declaration block into lowercase property names and values
pub fn declarations(css: &str) -> Vec<(String, &str)> {
    css.split(';')
        .filter_map(|decl| decl.split_once(':'))
        .map(|(prop, value)| (prop.trim().to_lowercase(), value.trim()))
        .filter(|(prop, value)| !prop.is_empty() && !value.is_empty())
        .collect()
}

/// Remove all markup, keeping only the text
pub fn strip(input: &str) -> String {
    parse(input).iter().map(|seg| seg.text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(parse("hello"), vec![Segment::plain("hello")]);
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_single_region() {
        let segments = parse("a [c=\"color: red\"]b[c] c");
        assert_eq!(
            segments,
            vec![
                Segment::plain("a "),
                Segment::styled("b", "color: red"),
                Segment::plain(" c"),
            ]
        );
    }

    #[test]
    fn test_adjacent_regions() {
        let segments = parse("[c=\"color: grey\"]12:00[c][c=\"color: blue\"]info[c]");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].css, Some("color: grey"));
        assert_eq!(segments[1].text, "info");
    }

    #[test]
    fn test_unclosed_region_runs_to_end() {
        let segments = parse("x[c=\"color: red\"]tail");
        assert_eq!(
            segments,
            vec![Segment::plain("x"), Segment::styled("tail", "color: red")]
        );
    }

    #[test]
    fn test_unterminated_tag_is_literal() {
        assert_eq!(strip("x[c=\"color: red"), "x[c=\"color: red");
    }

    #[test]
    fn test_declarations() {
        let decls = declarations("color: white; Font-Weight: bold;; padding: 20px;");
        assert_eq!(
            decls,
            vec![
                ("color".to_string(), "white"),
                ("font-weight".to_string(), "bold"),
                ("padding".to_string(), "20px"),
            ]
        );
    }

    #[test]
    fn test_strip() {
        assert_eq!(
            strip("[[c=\"color: grey\"]07:00:00:000[c]] [c=\"color: blue\"]info[c] ([c=\"color: grey\"]app[c]): hi"),
            "[07:00:00:000] info (app): hi"
        );
    }
}
