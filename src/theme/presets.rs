//! Built-in palette.
//!
//! All colors are ANSI 256-color indices so the components follow the
//! terminal's own palette.

use super::SectionStyles;
use super::variant::{ButtonVariant, CardVariant};
use crate::style::{ColorOverride, InteractionState, Padding, Size, StyleAttributes, StyleTable};
use crate::types::{BorderStyle, Color};

// =============================================================================
// Button
// =============================================================================

const BUTTON_BASE: StyleAttributes = StyleAttributes::new()
    .with_border(BorderStyle::Rounded)
    .with_padding(0, 2);

const BUTTON_DEFAULT: StyleAttributes = BUTTON_BASE
    .with_foreground(Color::ansi(250))
    .with_background(Color::ansi(235))
    .with_border_color(Color::ansi(240));

const BUTTON_PRIMARY: StyleAttributes = BUTTON_BASE
    .with_foreground(Color::ansi(15))
    .with_background(Color::ansi(34))
    .with_border_color(Color::ansi(34));

const BUTTON_SECONDARY: StyleAttributes = BUTTON_BASE
    .with_foreground(Color::ansi(250))
    .with_background(Color::ansi(236))
    .with_border_color(Color::ansi(238));

const BUTTON_DESTRUCTIVE: StyleAttributes = BUTTON_BASE
    .with_foreground(Color::ansi(15))
    .with_background(Color::ansi(196))
    .with_border_color(Color::ansi(196));

// Ghost has no border and keeps the terminal background
const BUTTON_GHOST: StyleAttributes = StyleAttributes::new()
    .with_padding(0, 2)
    .with_foreground(Color::ansi(250));

/// Built-in button table.
pub fn button_table() -> StyleTable<ButtonVariant> {
    StyleTable::new()
        .with_variant(ButtonVariant::Default, BUTTON_DEFAULT)
        .with_variant(ButtonVariant::Primary, BUTTON_PRIMARY)
        .with_variant(ButtonVariant::Secondary, BUTTON_SECONDARY)
        .with_variant(ButtonVariant::Destructive, BUTTON_DESTRUCTIVE)
        .with_variant(ButtonVariant::Ghost, BUTTON_GHOST)
        .with_size(Size::Small, Padding::new(0, 1))
        .with_size(Size::Medium, Padding::new(0, 2))
        .with_size(Size::Large, Padding::new(1, 4))
        .with_state(InteractionState::Normal, ColorOverride::NONE)
        .with_state(
            InteractionState::Focused,
            ColorOverride::NONE
                .border_color(Color::ansi(40))
                .foreground(Color::ansi(15)),
        )
        .with_state(
            InteractionState::Disabled,
            ColorOverride::NONE
                .foreground(Color::ansi(243))
                .background(Color::ansi(236))
                .border_color(Color::ansi(238)),
        )
}

// =============================================================================
// Card
// =============================================================================

const CARD_BASE: StyleAttributes = StyleAttributes::new()
    .with_border(BorderStyle::Rounded)
    .with_padding(1, 2);

/// Built-in card table.
pub fn card_table() -> StyleTable<CardVariant> {
    StyleTable::new()
        .with_variant(
            CardVariant::Default,
            CARD_BASE.with_border_color(Color::ansi(240)),
        )
        .with_variant(
            CardVariant::Muted,
            CARD_BASE
                .with_border_color(Color::ansi(238))
                .with_background(Color::ansi(234)),
        )
        .with_variant(
            CardVariant::Primary,
            CARD_BASE
                .with_border_color(Color::ansi(34))
                .with_background(Color::ansi(235)),
        )
        .with_variant(
            CardVariant::Destructive,
            CARD_BASE
                .with_border_color(Color::ansi(196))
                .with_background(Color::ansi(235)),
        )
        .with_size(Size::Small, Padding::new(0, 1))
        .with_size(Size::Medium, Padding::new(1, 2))
        .with_size(Size::Large, Padding::new(2, 4))
        .with_state(InteractionState::Normal, ColorOverride::NONE)
        .with_state(
            InteractionState::Focused,
            ColorOverride::NONE.border_color(Color::ansi(46)),
        )
        .with_state(
            InteractionState::Disabled,
            ColorOverride::NONE
                .border_color(Color::ansi(238))
                .foreground(Color::ansi(243)),
        )
}

/// Built-in styles for the card's header/content/footer sections.
pub const fn card_sections() -> SectionStyles {
    SectionStyles {
        header: StyleAttributes::new().bold().with_margin_bottom(1),
        content: StyleAttributes::new(),
        footer: StyleAttributes::new()
            .with_foreground(Color::ansi(243))
            .with_margin_top(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::table::VariantKey;

    #[test]
    fn test_every_button_variant_has_entry() {
        let table = button_table();
        for v in ButtonVariant::all() {
            assert!(table.variant(*v).is_some(), "Missing entry for {:?}", v);
        }
    }

    #[test]
    fn test_every_card_variant_has_entry() {
        let table = card_table();
        for v in CardVariant::all() {
            assert!(table.variant(*v).is_some(), "Missing entry for {:?}", v);
        }
    }

    #[test]
    fn test_every_axis_has_entry() {
        let buttons = button_table();
        let cards = card_table();
        for size in Size::all() {
            assert!(buttons.size(*size).is_some());
            assert!(cards.size(*size).is_some());
        }
        for state in InteractionState::all() {
            assert!(buttons.state(*state).is_some());
            assert!(cards.state(*state).is_some());
        }
    }

    #[test]
    fn test_normal_state_is_identity() {
        assert_eq!(button_table().state(InteractionState::Normal), Some(ColorOverride::NONE));
        assert_eq!(card_table().state(InteractionState::Normal), Some(ColorOverride::NONE));
    }

    #[test]
    fn test_medium_matches_base_padding() {
        // Medium is a no-op on the built-in bases
        let buttons = button_table();
        let base = buttons.base(ButtonVariant::Primary);
        assert_eq!(buttons.size(Size::Medium), Some(base.padding));

        let cards = card_table();
        let base = cards.base(CardVariant::Default);
        assert_eq!(cards.size(Size::Medium), Some(base.padding));
    }

    #[test]
    fn test_ghost_has_no_border() {
        let ghost = button_table().base(ButtonVariant::Ghost);
        assert_eq!(ghost.border, BorderStyle::None);
        assert!(ghost.background.is_terminal_default());
    }

    #[test]
    fn test_section_styles() {
        let sections = card_sections();
        assert!(sections.header.is_bold());
        assert_eq!(sections.header.margin_bottom, 1);
        assert_eq!(sections.content, StyleAttributes::new());
        assert_eq!(sections.footer.margin_top, 1);
        assert_eq!(sections.footer.foreground, Color::ansi(243));
    }
}
