//! # spark-widgets
//!
//! Terminal button and card components.
//!
//! Components are immutable values. Rendering folds a variant, a size, an
//! interaction state and an optional fixed width into one concrete
//! [`StyleAttributes`] and paints content inside it. Buttons react to key
//! presses by returning deferred [`Effect`]s for the host to run.
//!
//! ```text
//! builder → component → resolve(variant, size, state, width) → paint → String
//!                     ↘ handle(KeyboardEvent) → Option<Effect<M>>
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Colors, text attributes, border styles
//! - [`style`] - Style attributes, per-component style tables, resolution
//! - [`theme`] - Built-in palette, TOML palette patches
//! - [`renderer`] - The `Paint` trait, ANSI painter, width measurement
//! - [`input`] - Keyboard events
//! - [`effect`] - Deferred effects and a simple queue
//! - [`components`] - Button and Card
//!
//! ## Example
//!
//! ```
//! use spark_widgets::{Button, Card, KeyboardEvent};
//!
//! #[derive(Debug, PartialEq)]
//! enum Msg {
//!     Saved,
//! }
//!
//! let save = Button::primary("Save").focused().on_press(|| Msg::Saved);
//! print!("{}", save.render());
//!
//! if let Some(effect) = save.handle(&KeyboardEvent::confirm()) {
//!     assert_eq!(effect.run(), Msg::Saved);
//! }
//!
//! let card = Card::new("3 files changed").header("Commit").footer("press enter");
//! println!("{}", card.render());
//! ```

pub mod components;
pub mod effect;
pub mod input;
pub mod renderer;
pub mod style;
pub mod theme;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use components::{Button, ButtonOption, Card, CardOption, PressCallback, Section, compose};

pub use effect::{Effect, EffectQueue};

pub use input::{KeyState, KeyboardEvent, Modifiers};

pub use renderer::{AnsiPainter, Paint, string_width, strip_ansi};

pub use style::{ColorOverride, InteractionState, Padding, Size, StyleAttributes, StyleTable};
pub use style::table::VariantKey;

pub use theme::{ButtonVariant, CardVariant, PaletteError, SectionStyles, Theme, ThemeConfig};
