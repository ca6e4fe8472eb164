//! Renderer translating CSS markup into ANSI terminal escapes

use super::{markup, StyleRenderer};
use colored::{Color, Colorize};

/// Maps the CSS subset used in markup onto terminal styling.
///
/// Supported: `color`, `background`/`background-color` (named colors, `#rrggbb`,
/// `rgb()`/`rgba()`, first color stop of a gradient), `font-weight: bold`,
/// `font-style: italic`, `text-decoration: underline` and `padding` in px
/// (one space per 10px, between one and eight). `font-size` has no terminal
/// equivalent and is ignored.
///
/// Escapes are only emitted when `colored` decides the output supports them
/// (`NO_COLOR`, `CLICOLOR_FORCE`, tty detection).
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiRenderer;

impl StyleRenderer for AnsiRenderer {
    fn render(&self, args: &[String]) -> Vec<String> {
        args.iter()
            .map(|arg| {
                markup::parse(arg)
                    .into_iter()
                    .map(|segment| match segment.css {
                        Some(css) => TextStyle::from_css(css).apply(segment.text),
                        None => segment.text.to_string(),
                    })
                    .collect()
            })
            .collect()
    }

    fn name(&self) -> &str {
        "ansi"
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct TextStyle {
    fg: Option<Color>,
    bg: Option<Color>,
    bold: bool,
    italic: bool,
    underline: bool,
    padding: usize,
}

impl TextStyle {
    fn from_css(css: &str) -> Self {
        let mut style = TextStyle::default();
        for (prop, value) in markup::declarations(css) {
            match prop.as_str() {
                "color" => style.fg = parse_color(value),
                "background" | "background-color" => style.bg = parse_color(value),
                "font-weight" => style.bold = value == "bold" || value.parse::<u16>().is_ok_and(|w| w >= 600),
                "font-style" => style.italic = value == "italic",
                "text-decoration" => style.underline = value.contains("underline"),
                "padding" => style.padding = parse_padding(value),
                _ => {}
            }
        }
        style
    }

    fn apply(&self, text: &str) -> String {
        let pad = " ".repeat(self.padding);
        let padded = format!("{pad}{text}{pad}");
        let mut styled = padded.as_str().normal();
        if let Some(fg) = self.fg {
            styled = styled.color(fg);
        }
        if let Some(bg) = self.bg {
            styled = styled.on_color(bg);
        }
        if self.bold {
            styled = styled.bold();
        }
        if self.italic {
            styled = styled.italic();
        }
        if self.underline {
            styled = styled.underline();
        }
        styled.to_string()
    }
}

fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim().to_lowercase();
    if let Some(inner) = value.strip_prefix("linear-gradient(") {
        // Use the first color stop
        let start = inner.find(|c: char| c == '#' || c.is_ascii_alphabetic())?;
        let stops = &inner[start..];
        if let Some(idx) = stops.find("rgb") {
            return parse_color(&stops[idx..]);
        }
        return stops
            .split([',', ' ', ')'])
            .find_map(parse_color);
    }
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }
    if value.starts_with("rgb") {
        let open = value.find('(')?;
        let close = value[open..].find(')')? + open;
        let mut channels = value[open + 1..close]
            .split(',')
            .map(|c| c.trim().parse::<u8>());
        let r = channels.next()?.ok()?;
        let g = channels.next()?.ok()?;
        let b = channels.next()?.ok()?;
        return Some(Color::TrueColor { r, g, b });
    }
    named_color(&value)
}

fn parse_hex(hex: &str) -> Option<Color> {
    let hex = hex.as_bytes().get(..6)?;
    let channel = |i: usize| {
        let pair = std::str::from_utf8(&hex[i..i + 2]).ok()?;
        u8::from_str_radix(pair, 16).ok()
    };
    Some(Color::TrueColor {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" | "fuchsia" => Color::Magenta,
        "cyan" | "aqua" => Color::Cyan,
        "white" => Color::White,
        "grey" | "gray" => Color::BrightBlack,
        "orange" => Color::TrueColor {
            r: 255,
            g: 165,
            b: 0,
        },
        _ => return None,
    };
    Some(color)
}

/// Widest padding, in columns, drawn on either side of a region
const MAX_PADDING: usize = 8;

fn parse_padding(value: &str) -> usize {
    let first = value.split_whitespace().next().unwrap_or_default();
    match first.trim_end_matches("px").parse::<f32>() {
        Ok(px) if px.is_finite() && px > 0.0 => {
            ((px / 10.0).round() as usize).clamp(1, MAX_PADDING)
        }
        _ => 0,
    }
}
