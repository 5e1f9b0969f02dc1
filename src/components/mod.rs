//! Components - Button and Card.
//!
//! Components are plain values built with chained options. Rendering
//! resolves a style from the [`Theme`](crate::theme::Theme) and hands it to
//! a [`Paint`](crate::renderer::Paint) implementation.
//!
//! - [`Button`] - labelled, activatable, returns [`Effect`](crate::effect::Effect)s
//! - [`Card`] - framed header/content/footer block, display only

pub mod button;
pub mod card;
pub mod compose;

pub use button::{Button, ButtonOption, PressCallback};
pub use card::{Card, CardOption};
pub use compose::{Section, compose};
