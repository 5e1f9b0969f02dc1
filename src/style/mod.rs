//! Style attribute model.
//!
//! A [`StyleAttributes`] value is everything a painter needs to draw one
//! block: border, padding, margins, colors, width and emphasis. Values are
//! `Copy` and built with chained `const` setters so tables can be declared
//! as constants.
//!
//! Two restricted overrides sit next to it:
//! - [`Padding`] - what a size class may change
//! - [`ColorOverride`] - what an interaction state may change
//!
//! The two touch disjoint fields, which is what lets
//! [`StyleTable`](table::StyleTable) compose them in any order-independent
//! way on top of a variant base.
//!
//! # Example
//!
//! ```
//! use spark_widgets::style::StyleAttributes;
//! use spark_widgets::types::{BorderStyle, Color};
//!
//! const BASE: StyleAttributes = StyleAttributes::new()
//!     .with_border(BorderStyle::Rounded)
//!     .with_padding(0, 2)
//!     .with_foreground(Color::ansi(250));
//!
//! assert_eq!(BASE.padding.horizontal, 2);
//! ```

pub mod table;

pub use table::{InteractionState, Size, StyleTable};

use crate::types::{Attr, BorderStyle, Color};

// =============================================================================
// Padding
// =============================================================================

/// Vertical and horizontal padding in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Padding {
    pub vertical: u16,
    pub horizontal: u16,
}

impl Padding {
    pub const fn new(vertical: u16, horizontal: u16) -> Self {
        Self { vertical, horizontal }
    }

    /// Replace the padding of `style`, leaving every other field alone.
    #[inline]
    pub const fn apply(self, style: StyleAttributes) -> StyleAttributes {
        style.with_padding(self.vertical, self.horizontal)
    }
}

// =============================================================================
// ColorOverride
// =============================================================================

/// Partial color replacement. `None` fields keep the underlying color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorOverride {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub border_color: Option<Color>,
}

impl ColorOverride {
    /// The identity override.
    pub const NONE: Self = Self {
        foreground: None,
        background: None,
        border_color: None,
    };

    pub const fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub const fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub const fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    /// True when applying this override changes nothing.
    pub const fn is_identity(&self) -> bool {
        self.foreground.is_none() && self.background.is_none() && self.border_color.is_none()
    }

    /// Replace the colors of `style` this override sets.
    pub const fn apply(self, mut style: StyleAttributes) -> StyleAttributes {
        if let Some(fg) = self.foreground {
            style.foreground = fg;
        }
        if let Some(bg) = self.background {
            style.background = bg;
        }
        if let Some(border) = self.border_color {
            style.border_color = border;
        }
        style
    }
}

// =============================================================================
// StyleAttributes
// =============================================================================

/// A fully concrete style for one painted block.
///
/// `width` is the fixed outer width excluding the border (padding counts
/// toward it). `None` means natural width; the painter treats `Some(0)` the
/// same way, and [`with_width`](Self::with_width) never stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleAttributes {
    pub border: BorderStyle,
    pub padding: Padding,
    pub margin_top: u16,
    pub margin_bottom: u16,
    pub foreground: Color,
    pub background: Color,
    pub border_color: Color,
    pub width: Option<u16>,
    pub attrs: Attr,
}

impl StyleAttributes {
    /// An unstyled block: no border, no padding, terminal colors.
    pub const fn new() -> Self {
        Self {
            border: BorderStyle::None,
            padding: Padding::new(0, 0),
            margin_top: 0,
            margin_bottom: 0,
            foreground: Color::TERMINAL_DEFAULT,
            background: Color::TERMINAL_DEFAULT,
            border_color: Color::TERMINAL_DEFAULT,
            width: None,
            attrs: Attr::NONE,
        }
    }

    pub const fn with_border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    pub const fn with_padding(mut self, vertical: u16, horizontal: u16) -> Self {
        self.padding = Padding::new(vertical, horizontal);
        self
    }

    pub const fn with_margin_top(mut self, lines: u16) -> Self {
        self.margin_top = lines;
        self
    }

    pub const fn with_margin_bottom(mut self, lines: u16) -> Self {
        self.margin_bottom = lines;
        self
    }

    pub const fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    pub const fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub const fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    /// Set a fixed width. Zero clears it back to natural width.
    pub const fn with_width(mut self, width: u16) -> Self {
        self.width = if width > 0 { Some(width) } else { None };
        self
    }

    pub const fn with_attrs(mut self, attrs: Attr) -> Self {
        self.attrs = attrs;
        self
    }

    pub const fn bold(mut self) -> Self {
        self.attrs = self.attrs.union(Attr::BOLD);
        self
    }

    #[inline]
    pub const fn is_bold(&self) -> bool {
        self.attrs.contains(Attr::BOLD)
    }

    /// Fixed width, if one is set and positive.
    #[inline]
    pub fn fixed_width(&self) -> Option<u16> {
        self.width.filter(|w| *w > 0)
    }
}
