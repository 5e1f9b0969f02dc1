//! Theme for spark-widgets.
//!
//! A [`Theme`] bundles the style tables of every component plus the card's
//! section styles. [`Theme::default`] is the built-in palette; a TOML
//! palette may patch individual entries (see [`config`]).
//!
//! # Example
//!
//! ```rust
//! use spark_widgets::theme::{ButtonVariant, Theme};
//! use spark_widgets::style::{InteractionState, Size};
//!
//! let theme = Theme::default();
//! let style = theme.button.resolve(
//!     ButtonVariant::Primary,
//!     Size::Medium,
//!     InteractionState::Focused,
//!     None,
//! );
//! assert!(style.border.is_visible());
//! ```

use std::path::Path;
use std::sync::OnceLock;

use tracing::debug;

use crate::style::{StyleAttributes, StyleTable};

pub mod config;
pub mod presets;
pub mod variant;

pub use config::{PaletteError, Result, ThemeConfig};
pub use presets::{button_table, card_sections, card_table};
pub use variant::{ButtonVariant, CardVariant};

// =============================================================================
// SectionStyles
// =============================================================================

/// Styles applied to each card section before the sections are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionStyles {
    pub header: StyleAttributes,
    pub content: StyleAttributes,
    pub footer: StyleAttributes,
}

impl Default for SectionStyles {
    fn default() -> Self {
        card_sections()
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Style tables for every component.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub button: StyleTable<ButtonVariant>,
    pub card: StyleTable<CardVariant>,
    pub sections: SectionStyles,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            button: button_table(),
            card: card_table(),
            sections: card_sections(),
        }
    }
}

impl Theme {
    /// Shared built-in palette, used by the components' `render()`.
    pub fn builtin() -> &'static Theme {
        static BUILTIN: OnceLock<Theme> = OnceLock::new();
        BUILTIN.get_or_init(Theme::default)
    }

    /// Built-in palette patched with a TOML palette.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config = ThemeConfig::from_toml_str(input)?;
        Self::default().patched(&config)
    }

    /// Built-in palette patched with the TOML palette at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let theme = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded palette");
        Ok(theme)
    }
}
