//! Style tables and resolution.
//!
//! A [`StyleTable`] holds three small lookup tables for one component type:
//!
//! ```text
//! variant -> StyleAttributes   (base: border, colors)
//! size    -> Padding           (padding only)
//! state   -> ColorOverride     (colors only)
//! ```
//!
//! [`StyleTable::resolve`] folds them, in that order, plus an optional fixed
//! width, into one concrete [`StyleAttributes`]. Resolution is total: a
//! missing variant falls back to the default variant's entry, a missing size
//! or state entry skips its step.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use super::{ColorOverride, Padding, StyleAttributes};

// =============================================================================
// Style axes
// =============================================================================

/// Padding density class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

impl Size {
    /// Parse from string (case-insensitive). Accepts short forms.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "small" | "sm" => Some(Self::Small),
            "medium" | "md" => Some(Self::Medium),
            "large" | "lg" => Some(Self::Large),
            _ => None,
        }
    }

    pub const fn all() -> &'static [Size] {
        &[Self::Small, Self::Medium, Self::Large]
    }
}

/// Visual and input state of a component.
///
/// Doubles as the button's input gate: a `Disabled` button never activates,
/// a `Focused` one does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    #[default]
    Normal,
    Focused,
    Disabled,
}

impl InteractionState {
    /// Parse from string (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(Self::Normal),
            "focused" => Some(Self::Focused),
            "disabled" => Some(Self::Disabled),
            _ => None,
        }
    }

    pub const fn all() -> &'static [InteractionState] {
        &[Self::Normal, Self::Focused, Self::Disabled]
    }
}

/// A closed set of component variants usable as a table key.
pub trait VariantKey: Copy + Eq + Hash + Debug + 'static {
    /// Entry used when a variant has no table entry.
    const DEFAULT: Self;

    /// Lowercase name, as used in palette files.
    fn name(&self) -> &'static str;

    /// Parse from string (case-insensitive).
    fn from_name(s: &str) -> Option<Self>;

    /// Every member of the enumeration.
    fn all() -> &'static [Self];

    /// Parse, falling back to [`DEFAULT`](Self::DEFAULT) for unknown names.
    fn from_name_or_default(s: &str) -> Self {
        Self::from_name(s).unwrap_or(Self::DEFAULT)
    }
}

// =============================================================================
// StyleTable
// =============================================================================

/// Lookup tables for one component type.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTable<V: VariantKey> {
    variants: HashMap<V, StyleAttributes>,
    sizes: HashMap<Size, Padding>,
    states: HashMap<InteractionState, ColorOverride>,
}

impl<V: VariantKey> Default for StyleTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VariantKey> StyleTable<V> {
    /// An empty table. Every lookup misses and resolves to
    /// `StyleAttributes::default()`.
    pub fn new() -> Self {
        Self {
            variants: HashMap::new(),
            sizes: HashMap::new(),
            states: HashMap::new(),
        }
    }

    pub fn with_variant(mut self, variant: V, style: StyleAttributes) -> Self {
        self.variants.insert(variant, style);
        self
    }

    pub fn with_size(mut self, size: Size, padding: Padding) -> Self {
        self.sizes.insert(size, padding);
        self
    }

    pub fn with_state(mut self, state: InteractionState, colors: ColorOverride) -> Self {
        self.states.insert(state, colors);
        self
    }

    pub fn set_variant(&mut self, variant: V, style: StyleAttributes) {
        self.variants.insert(variant, style);
    }

    pub fn set_size(&mut self, size: Size, padding: Padding) {
        self.sizes.insert(size, padding);
    }

    pub fn set_state(&mut self, state: InteractionState, colors: ColorOverride) {
        self.states.insert(state, colors);
    }

    /// Remove a variant entry, returning it.
    pub fn remove_variant(&mut self, variant: V) -> Option<StyleAttributes> {
        self.variants.remove(&variant)
    }

    pub fn variant(&self, variant: V) -> Option<&StyleAttributes> {
        self.variants.get(&variant)
    }

    pub fn size(&self, size: Size) -> Option<Padding> {
        self.sizes.get(&size).copied()
    }

    pub fn state(&self, state: InteractionState) -> Option<ColorOverride> {
        self.states.get(&state).copied()
    }

    /// Base style for `variant`, with fallback to the default variant.
    pub fn base(&self, variant: V) -> StyleAttributes {
        if let Some(style) = self.variants.get(&variant) {
            return *style;
        }

        debug!(?variant, fallback = ?V::DEFAULT, "variant has no table entry");
        self.variants.get(&V::DEFAULT).copied().unwrap_or_default()
    }

    /// Mutable entry for `variant`, seeded from [`base`](Self::base) when
    /// missing.
    pub fn variant_mut(&mut self, variant: V) -> &mut StyleAttributes {
        let seed = self.base(variant);
        self.variants.entry(variant).or_insert(seed)
    }

    /// Resolve one concrete style.
    ///
    /// Steps, each only touching the fields it owns:
    /// 1. variant base (fallback to default variant)
    /// 2. size padding, if the size has an entry
    /// 3. state colors, if the state has an entry
    /// 4. fixed width, if `width` is set and positive
    pub fn resolve(
        &self,
        variant: V,
        size: Size,
        state: InteractionState,
        width: Option<u16>,
    ) -> StyleAttributes {
        let mut style = self.base(variant);

        if let Some(padding) = self.size(size) {
            style = padding.apply(style);
        }

        if let Some(colors) = self.state(state) {
            style = colors.apply(style);
        }

        if let Some(width) = width.filter(|w| *w > 0) {
            style = style.with_width(width);
        }

        style
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BorderStyle, Color};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Tone {
        Plain,
        Loud,
        Quiet,
    }

    impl VariantKey for Tone {
        const DEFAULT: Self = Tone::Plain;

        fn name(&self) -> &'static str {
            match self {
                Tone::Plain => "plain",
                Tone::Loud => "loud",
                Tone::Quiet => "quiet",
            }
        }

        fn from_name(s: &str) -> Option<Self> {
            match s {
                "plain" => Some(Tone::Plain),
                "loud" => Some(Tone::Loud),
                "quiet" => Some(Tone::Quiet),
                _ => None,
            }
        }

        fn all() -> &'static [Self] {
            &[Tone::Plain, Tone::Loud, Tone::Quiet]
        }
    }

    const PLAIN: StyleAttributes = StyleAttributes::new()
        .with_border(BorderStyle::Rounded)
        .with_padding(0, 2)
        .with_foreground(Color::ansi(250))
        .with_border_color(Color::ansi(240));

    const LOUD: StyleAttributes = StyleAttributes::new()
        .with_border(BorderStyle::Rounded)
        .with_padding(0, 2)
        .with_foreground(Color::ansi(15))
        .with_background(Color::ansi(196));

    fn table() -> StyleTable<Tone> {
        StyleTable::new()
            .with_variant(Tone::Plain, PLAIN)
            .with_variant(Tone::Loud, LOUD)
            .with_size(Size::Small, Padding::new(0, 1))
            .with_size(Size::Medium, Padding::new(0, 2))
            .with_size(Size::Large, Padding::new(1, 4))
            .with_state(InteractionState::Normal, ColorOverride::NONE)
            .with_state(
                InteractionState::Focused,
                ColorOverride::NONE.border_color(Color::ansi(40)),
            )
    }

    #[test]
    fn test_missing_variant_falls_back_to_default() {
        let t = table();
        assert!(t.variant(Tone::Quiet).is_none());
        assert_eq!(t.base(Tone::Quiet), PLAIN);
        assert_eq!(
            t.resolve(Tone::Quiet, Size::Large, InteractionState::Focused, Some(12)),
            t.resolve(Tone::Plain, Size::Large, InteractionState::Focused, Some(12)),
        );
    }

    #[test]
    fn test_empty_table_resolves_to_unstyled() {
        let t: StyleTable<Tone> = StyleTable::new();
        let style = t.resolve(Tone::Loud, Size::Large, InteractionState::Disabled, None);
        assert_eq!(style, StyleAttributes::default());
    }

    #[test]
    fn test_missing_state_entry_is_skipped() {
        let t = table();
        let style = t.resolve(Tone::Loud, Size::Medium, InteractionState::Disabled, None);
        assert_eq!(style, LOUD);
    }

    #[test]
    fn test_resolve_precedence() {
        let t = table();
        let style = t.resolve(Tone::Loud, Size::Large, InteractionState::Focused, Some(30));

        assert_eq!(style.padding, Padding::new(1, 4));
        assert_eq!(style.border_color, Color::ansi(40));
        assert_eq!(style.foreground, LOUD.foreground);
        assert_eq!(style.background, LOUD.background);
        assert_eq!(style.width, Some(30));
    }

    #[test]
    fn test_zero_width_is_natural() {
        let t = table();
        let style = t.resolve(Tone::Plain, Size::Medium, InteractionState::Normal, Some(0));
        assert_eq!(style.width, None);
    }

    #[test]
    fn test_variant_mut_seeds_from_fallback() {
        let mut t = table();
        t.variant_mut(Tone::Quiet).background = Color::ansi(234);

        let quiet = t.variant(Tone::Quiet).copied().unwrap_or_default();
        assert_eq!(quiet.background, Color::ansi(234));
        assert_eq!(quiet.foreground, PLAIN.foreground);
    }

    #[test]
    fn test_remove_variant() {
        let mut t = table();
        assert_eq!(t.remove_variant(Tone::Loud), Some(LOUD));
        assert_eq!(t.base(Tone::Loud), PLAIN);
    }

    #[test]
    fn test_axis_names() {
        assert_eq!(Size::from_name("LG"), Some(Size::Large));
        assert_eq!(Size::from_name("medium"), Some(Size::Medium));
        assert_eq!(Size::from_name("xl"), None);
        assert_eq!(InteractionState::from_name("Focused"), Some(InteractionState::Focused));
        assert_eq!(InteractionState::from_name("hover"), None);
        assert_eq!(Size::default(), Size::Medium);
        assert_eq!(InteractionState::default(), InteractionState::Normal);
    }

    #[test]
    fn test_from_name_or_default() {
        assert_eq!(Tone::from_name_or_default("loud"), Tone::Loud);
        assert_eq!(Tone::from_name_or_default("bogus"), Tone::Plain);
    }
}
