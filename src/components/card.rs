//! Card component.
//!
//! A framed, display-only block with an optional header, content and
//! footer. Empty sections are dropped before composition. The header keeps
//! its bottom margin, so a card with only a header renders the header and
//! one blank row inside the frame.

use std::fmt;

use crate::components::compose::{Section, compose};
use crate::renderer::{AnsiPainter, Paint};
use crate::style::{InteractionState, Size, StyleAttributes};
use crate::theme::{CardVariant, Theme};

/// A single construction option. Chained methods on [`Card`] do the same
/// thing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardOption {
    Header(String),
    Content(String),
    Footer(String),
    /// Fixed width in cells. 0 means natural width.
    Width(u16),
    Variant(CardVariant),
    Size(Size),
    State(InteractionState),
}

/// Framed block with header, content and footer sections.
#[derive(Clone, PartialEq, Eq)]
pub struct Card {
    header: String,
    content: String,
    footer: String,
    variant: CardVariant,
    size: Size,
    state: InteractionState,
    width: Option<u16>,
}

impl Card {
    /// Card of the given variant with Medium size and Normal state.
    pub fn from_variant(variant: CardVariant, content: impl Into<String>) -> Self {
        Self {
            header: String::new(),
            content: content.into(),
            footer: String::new(),
            variant,
            size: Size::Medium,
            state: InteractionState::Normal,
            width: None,
        }
    }

    pub fn new(content: impl Into<String>) -> Self {
        Self::from_variant(CardVariant::Default, content)
    }

    pub fn primary(content: impl Into<String>) -> Self {
        Self::from_variant(CardVariant::Primary, content)
    }

    pub fn muted(content: impl Into<String>) -> Self {
        Self::from_variant(CardVariant::Muted, content)
    }

    pub fn destructive(content: impl Into<String>) -> Self {
        Self::from_variant(CardVariant::Destructive, content)
    }

    // -------------------------------------------------------------------------
    // Options
    // -------------------------------------------------------------------------

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }

    /// Fixed width in cells. 0 restores natural width.
    pub fn width(mut self, width: u16) -> Self {
        self.width = (width > 0).then_some(width);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn with_variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_state(mut self, state: InteractionState) -> Self {
        self.state = state;
        self
    }

    pub fn focused(self) -> Self {
        self.with_state(InteractionState::Focused)
    }

    pub fn disabled(self) -> Self {
        self.with_state(InteractionState::Disabled)
    }

    pub fn normal(self) -> Self {
        self.with_state(InteractionState::Normal)
    }

    pub fn apply(self, option: CardOption) -> Self {
        match option {
            CardOption::Header(header) => self.header(header),
            CardOption::Content(content) => self.content(content),
            CardOption::Footer(footer) => self.footer(footer),
            CardOption::Width(width) => self.width(width),
            CardOption::Variant(variant) => self.with_variant(variant),
            CardOption::Size(size) => self.size(size),
            CardOption::State(state) => self.with_state(state),
        }
    }

    /// Apply options in order. Later options win.
    pub fn apply_all(self, options: impl IntoIterator<Item = CardOption>) -> Self {
        options.into_iter().fold(self, Self::apply)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn header_text(&self) -> &str {
        &self.header
    }

    pub fn content_text(&self) -> &str {
        &self.content
    }

    pub fn footer_text(&self) -> &str {
        &self.footer
    }

    pub fn variant(&self) -> CardVariant {
        self.variant
    }

    pub fn current_size(&self) -> Size {
        self.size
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn fixed_width(&self) -> Option<u16> {
        self.width
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Resolved frame style under `theme`.
    pub fn style(&self, theme: &Theme) -> StyleAttributes {
        theme.card.resolve(self.variant, self.size, self.state, self.width)
    }

    /// Header, content and footer with their section styles.
    pub fn sections(&self, theme: &Theme) -> [Section<'_>; 3] {
        [
            Section::new(&self.header, theme.sections.header),
            Section::new(&self.content, theme.sections.content),
            Section::new(&self.footer, theme.sections.footer),
        ]
    }

    /// Render with the built-in palette and the ANSI painter.
    pub fn render(&self) -> String {
        self.render_with(Theme::builtin(), &AnsiPainter::new())
    }

    /// Compose the sections and paint them inside the resolved frame.
    /// No trailing line break is added.
    pub fn render_with<P: Paint + ?Sized>(&self, theme: &Theme, painter: &P) -> String {
        let body = compose(&self.sections(theme), painter);
        painter.paint(&self.style(theme), &body)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("header", &self.header)
            .field("content", &self.content)
            .field("footer", &self.footer)
            .field("variant", &self.variant)
            .field("size", &self.size)
            .field("state", &self.state)
            .field("width", &self.width)
            .finish()
    }
}
