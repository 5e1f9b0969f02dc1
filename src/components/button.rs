//! Button component.
//!
//! A button is an immutable value: a label, a variant, a size, an
//! interaction state, an optional fixed width and an optional press
//! callback. Rendering is pure. Input handling never mutates the button and
//! never calls the callback directly; it returns an [`Effect`] the host runs
//! later.
//!
//! # Example
//!
//! ```
//! use spark_widgets::components::Button;
//! use spark_widgets::input::KeyboardEvent;
//!
//! let save: Button<&str> = Button::primary("Save").focused().on_press(|| "saved");
//!
//! let effect = save.handle(&KeyboardEvent::confirm()).unwrap();
//! assert_eq!(effect.run(), "saved");
//! assert!(save.render().ends_with('\n'));
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::effect::Effect;
use crate::input::KeyboardEvent;
use crate::renderer::{AnsiPainter, Paint};
use crate::style::{InteractionState, Size, StyleAttributes};
use crate::theme::{ButtonVariant, Theme};

/// Press callback. Shared so buttons stay cheap to clone.
pub type PressCallback<M> = Arc<dyn Fn() -> M + Send + Sync>;

// =============================================================================
// ButtonOption
// =============================================================================

/// A single construction option, for hosts that build option lists at
/// runtime. Chained methods on [`Button`] do the same thing.
pub enum ButtonOption<M> {
    /// Fixed width in cells. 0 means natural width.
    Width(u16),
    Size(Size),
    Focused,
    Disabled,
    OnPress(PressCallback<M>),
}

impl<M> ButtonOption<M> {
    pub fn on_press<F>(f: F) -> Self
    where
        F: Fn() -> M + Send + Sync + 'static,
    {
        Self::OnPress(Arc::new(f))
    }
}

impl<M> fmt::Debug for ButtonOption<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width(width) => f.debug_tuple("Width").field(width).finish(),
            Self::Size(size) => f.debug_tuple("Size").field(size).finish(),
            Self::Focused => f.write_str("Focused"),
            Self::Disabled => f.write_str("Disabled"),
            Self::OnPress(_) => f.write_str("OnPress(..)"),
        }
    }
}

// =============================================================================
// Button
// =============================================================================

/// An activatable, labelled button.
pub struct Button<M> {
    label: String,
    variant: ButtonVariant,
    size: Size,
    state: InteractionState,
    width: Option<u16>,
    on_press: Option<PressCallback<M>>,
}

impl<M> Button<M> {
    /// Button of the given variant with Medium size and Normal state.
    pub fn from_variant(variant: ButtonVariant, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant,
            size: Size::Medium,
            state: InteractionState::Normal,
            width: None,
            on_press: None,
        }
    }

    /// Default (neutral) button.
    pub fn new(label: impl Into<String>) -> Self {
        Self::from_variant(ButtonVariant::Default, label)
    }

    pub fn primary(label: impl Into<String>) -> Self {
        Self::from_variant(ButtonVariant::Primary, label)
    }

    pub fn secondary(label: impl Into<String>) -> Self {
        Self::from_variant(ButtonVariant::Secondary, label)
    }

    pub fn destructive(label: impl Into<String>) -> Self {
        Self::from_variant(ButtonVariant::Destructive, label)
    }

    pub fn ghost(label: impl Into<String>) -> Self {
        Self::from_variant(ButtonVariant::Ghost, label)
    }

    // -------------------------------------------------------------------------
    // Options
    // -------------------------------------------------------------------------

    /// Fixed width in cells. 0 restores natural width.
    pub fn width(mut self, width: u16) -> Self {
        self.width = (width > 0).then_some(width);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
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

    /// Callback run when the focused button is activated.
    pub fn on_press<F>(mut self, f: F) -> Self
    where
        F: Fn() -> M + Send + Sync + 'static,
    {
        self.on_press = Some(Arc::new(f));
        self
    }

    pub fn apply(self, option: ButtonOption<M>) -> Self {
        match option {
            ButtonOption::Width(width) => self.width(width),
            ButtonOption::Size(size) => self.size(size),
            ButtonOption::Focused => self.focused(),
            ButtonOption::Disabled => self.disabled(),
            ButtonOption::OnPress(callback) => Self {
                on_press: Some(callback),
                ..self
            },
        }
    }

    /// Apply options in order. Later options win.
    pub fn apply_all(self, options: impl IntoIterator<Item = ButtonOption<M>>) -> Self {
        options.into_iter().fold(self, Self::apply)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn variant(&self) -> ButtonVariant {
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

    pub fn is_focused(&self) -> bool {
        self.state == InteractionState::Focused
    }

    pub fn is_disabled(&self) -> bool {
        self.state == InteractionState::Disabled
    }

    pub fn has_on_press(&self) -> bool {
        self.on_press.is_some()
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// React to a key event.
    ///
    /// Returns an effect yielding the callback's value when a focused,
    /// enabled button with a callback receives an activation key press.
    /// Everything else yields `None`. The button itself never changes.
    pub fn handle(&self, event: &KeyboardEvent) -> Option<Effect<M>>
    where
        M: 'static,
    {
        if self.is_disabled() {
            trace!(label = %self.label, key = %event.key, "disabled button ignored key");
            return None;
        }

        if !event.is_activation() || !self.is_focused() {
            return None;
        }

        let Some(callback) = self.on_press.as_ref().map(Arc::clone) else {
            trace!(label = %self.label, "activation without callback");
            return None;
        };

        trace!(label = %self.label, key = %event.key, "activation scheduled");
        Some(Effect::perform(move || callback()))
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Resolved style under `theme`.
    pub fn style(&self, theme: &Theme) -> StyleAttributes {
        theme.button.resolve(self.variant, self.size, self.state, self.width)
    }

    /// Render with the built-in palette and the ANSI painter.
    pub fn render(&self) -> String {
        self.render_with(Theme::builtin(), &AnsiPainter::new())
    }

    /// Render the label inside the resolved style, followed by exactly one
    /// line break.
    pub fn render_with<P: Paint + ?Sized>(&self, theme: &Theme, painter: &P) -> String {
        let mut out = painter.paint(&self.style(theme), &self.label);
        out.push('\n');
        out
    }
}

impl<M> Clone for Button<M> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            variant: self.variant,
            size: self.size,
            state: self.state,
            width: self.width,
            on_press: self.on_press.clone(),
        }
    }
}

impl<M> fmt::Debug for Button<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("variant", &self.variant)
            .field("size", &self.size)
            .field("state", &self.state)
            .field("width", &self.width)
            .field("on_press", &self.on_press.is_some())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
