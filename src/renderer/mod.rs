//! Painting styled blocks.
//!
//! The components never draw characters themselves. They hand a resolved
//! [`StyleAttributes`] and a content string to a [`Paint`] implementation
//! and get text back.
//!
//! [`AnsiPainter`] is the built-in painter:
//!
//! ```text
//!  margin_top blank lines
//!  ╭──────────╮   border (border_color)
//!  │          │   vertical padding
//!  │  content │   horizontal padding, fg/bg/attrs
//!  │          │
//!  ╰──────────╯
//!  margin_bottom blank lines
//! ```
//!
//! With a fixed width, each content line is padded or clipped to
//! `width - 2 * padding.horizontal` cells. Tabs expand to four spaces and
//! other control characters are dropped before measuring.

pub mod ansi;
pub mod measure;

pub use measure::{clip_to_width, expand_controls, string_width, strip_ansi};

use crate::style::StyleAttributes;
use crate::types::{Attr, Color};

// =============================================================================
// Paint
// =============================================================================

/// Renders content inside a style. Must be deterministic.
pub trait Paint {
    fn paint(&self, style: &StyleAttributes, content: &str) -> String;
}

impl<F> Paint for F
where
    F: Fn(&StyleAttributes, &str) -> String,
{
    fn paint(&self, style: &StyleAttributes, content: &str) -> String {
        self(style, content)
    }
}

// =============================================================================
// AnsiPainter
// =============================================================================

/// Box painter emitting ANSI SGR sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnsiPainter {
    color: bool,
}

impl AnsiPainter {
    /// Painter with colors and attributes.
    pub const fn new() -> Self {
        Self { color: true }
    }

    /// Painter that lays out borders and padding but emits no escape
    /// sequences.
    pub const fn plain() -> Self {
        Self { color: false }
    }

    pub const fn is_plain(&self) -> bool {
        !self.color
    }

    fn open(&self, foreground: Color, background: Color, attrs: Attr) -> String {
        if self.color {
            ansi::open(foreground, background, attrs)
        } else {
            String::new()
        }
    }
}

impl Default for AnsiPainter {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap `body` in `open`/reset, skipping the reset when nothing was opened.
fn styled(open: &str, body: &str) -> String {
    if open.is_empty() {
        body.to_string()
    } else {
        format!("{open}{body}{}", ansi::RESET)
    }
}

impl Paint for AnsiPainter {
    fn paint(&self, style: &StyleAttributes, content: &str) -> String {
        let pad_h = style.padding.horizontal as usize;
        let pad_v = style.padding.vertical as usize;
        let lines: Vec<_> = content.split('\n').map(expand_controls).collect();

        let inner_width = match style.fixed_width() {
            Some(width) => width as usize,
            None => lines.iter().map(|l| string_width(l)).max().unwrap_or(0) + 2 * pad_h,
        };
        let left = pad_h.min(inner_width);
        let text_width = inner_width.saturating_sub(2 * pad_h);
        let right = inner_width - left - text_width;

        let open = self.open(style.foreground, style.background, style.attrs);
        // Content may carry its own resets; restore the block style after each
        let reopen = format!("{}{open}", ansi::RESET);

        let mut rows = Vec::with_capacity(lines.len() + 2 * pad_v);
        let blank = styled(&open, &" ".repeat(inner_width));

        rows.extend(std::iter::repeat_n(blank.clone(), pad_v));
        for line in &lines {
            let clipped = clip_to_width(line, text_width);
            let fill = text_width.saturating_sub(string_width(&clipped));
            let text = if open.is_empty() {
                clipped.into_owned()
            } else {
                clipped.replace(ansi::RESET, &reopen)
            };
            let body = format!(
                "{}{}{}{}",
                " ".repeat(left),
                text,
                " ".repeat(fill),
                " ".repeat(right)
            );
            rows.push(styled(&open, &body));
        }
        rows.extend(std::iter::repeat_n(blank, pad_v));

        if style.border.is_visible() {
            let (h, v, tl, tr, br, bl) = style.border.chars();
            let border_open = self.open(style.border_color, Color::TERMINAL_DEFAULT, Attr::NONE);
            let side = styled(&border_open, v);
            let edge = h.repeat(inner_width);

            let mut framed = Vec::with_capacity(rows.len() + 2);
            framed.push(styled(&border_open, &format!("{tl}{edge}{tr}")));
            for row in rows {
                framed.push(format!("{side}{row}{side}"));
            }
            framed.push(styled(&border_open, &format!("{bl}{edge}{br}")));
            rows = framed;
        }

        let margin_top = usize::from(style.margin_top);
        let margin_bottom = usize::from(style.margin_bottom);
        let mut out = Vec::with_capacity(rows.len() + margin_top + margin_bottom);
        out.extend(std::iter::repeat_n(String::new(), margin_top));
        out.extend(rows);
        out.extend(std::iter::repeat_n(String::new(), margin_bottom));
        out.join("\n")
    }
}

// =============================================================================
// Tests
// =============================================================================
