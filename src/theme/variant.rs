//! Component variants.
//!
//! Each component has its own closed set of variants. A variant selects the
//! base border and color identity of the component; size and state are
//! layered on top by [`StyleTable::resolve`](crate::style::StyleTable::resolve).

use crate::style::table::VariantKey;

// =============================================================================
// ButtonVariant
// =============================================================================

/// Visual variants of a [`Button`](crate::components::Button).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonVariant {
    /// Neutral gray button
    #[default]
    Default,
    /// Primary action (green)
    Primary,
    /// Secondary action
    Secondary,
    /// Dangerous action (red)
    Destructive,
    /// Borderless, transparent background
    Ghost,
}

impl VariantKey for ButtonVariant {
    const DEFAULT: Self = Self::Default;

    fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Ghost => "ghost",
        }
    }

    fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            "destructive" => Some(Self::Destructive),
            "ghost" => Some(Self::Ghost),
            _ => None,
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::Default,
            Self::Primary,
            Self::Secondary,
            Self::Destructive,
            Self::Ghost,
        ]
    }
}

// =============================================================================
// CardVariant
// =============================================================================

/// Visual variants of a [`Card`](crate::components::Card).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardVariant {
    #[default]
    Default,
    Primary,
    /// Subdued surface
    Muted,
    Destructive,
}

impl VariantKey for CardVariant {
    const DEFAULT: Self = Self::Default;

    fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Muted => "muted",
            Self::Destructive => "destructive",
        }
    }

    fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "primary" => Some(Self::Primary),
            "muted" => Some(Self::Muted),
            "destructive" => Some(Self::Destructive),
            _ => None,
        }
    }

    fn all() -> &'static [Self] {
        &[Self::Default, Self::Primary, Self::Muted, Self::Destructive]
    }
}

// =============================================================================
// Tests
// =============================================================================
