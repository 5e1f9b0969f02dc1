//! Property tests for style resolution and painting.

use proptest::prelude::*;
use spark_widgets::renderer::string_width;
use spark_widgets::*;

fn button_variant() -> impl Strategy<Value = ButtonVariant> {
    prop::sample::select(ButtonVariant::all().to_vec())
}

fn card_variant() -> impl Strategy<Value = CardVariant> {
    prop::sample::select(CardVariant::all().to_vec())
}

fn size() -> impl Strategy<Value = Size> {
    prop::sample::select(Size::all().to_vec())
}

fn state() -> impl Strategy<Value = InteractionState> {
    prop::sample::select(InteractionState::all().to_vec())
}

fn width() -> impl Strategy<Value = Option<u16>> {
    prop::option::of(0u16..120)
}

/// Copy the color fields of `from` onto `style`.
fn with_colors_of(style: StyleAttributes, from: StyleAttributes) -> StyleAttributes {
    style
        .with_foreground(from.foreground)
        .with_background(from.background)
        .with_border_color(from.border_color)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_missing_variant_resolves_like_default(
        variant in button_variant(),
        size in size(),
        state in state(),
        width in width(),
    ) {
        let mut table = Theme::default().button;
        if variant != ButtonVariant::Default {
            table.remove_variant(variant);
        }

        prop_assert_eq!(
            table.resolve(variant, size, state, width),
            table.resolve(ButtonVariant::Default, size, state, width)
        );
    }

    #[test]
    fn prop_unknown_name_resolves_like_default(
        name in "[a-z]{1,12}",
        size in size(),
        state in state(),
    ) {
        prop_assume!(ButtonVariant::from_name(&name).is_none());
        let table = &Theme::builtin().button;
        let variant = ButtonVariant::from_name_or_default(&name);

        prop_assert_eq!(
            table.resolve(variant, size, state, None),
            table.resolve(ButtonVariant::Default, size, state, None)
        );
    }

    #[test]
    fn prop_size_only_changes_padding(
        variant in button_variant(),
        a in size(),
        b in size(),
        state in state(),
        width in width(),
    ) {
        let table = &Theme::builtin().button;
        let left = table.resolve(variant, a, state, width);
        let right = table.resolve(variant, b, state, width);

        prop_assert_eq!(
            left.with_padding(right.padding.vertical, right.padding.horizontal),
            right
        );
    }

    #[test]
    fn prop_state_only_changes_colors(
        variant in card_variant(),
        size in size(),
        a in state(),
        b in state(),
        width in width(),
    ) {
        let table = &Theme::builtin().card;
        let left = table.resolve(variant, size, a, width);
        let right = table.resolve(variant, size, b, width);

        prop_assert_eq!(with_colors_of(left, right), right);
    }

    #[test]
    fn prop_resolution_is_idempotent(
        variant in button_variant(),
        size in size(),
        state in state(),
        width in width(),
    ) {
        let table = &Theme::builtin().button;
        prop_assert_eq!(
            table.resolve(variant, size, state, width),
            table.resolve(variant, size, state, width)
        );
    }

    #[test]
    fn prop_width_override(
        variant in card_variant(),
        size in size(),
        state in state(),
        width in width(),
    ) {
        let style = Theme::builtin().card.resolve(variant, size, state, width);
        match width {
            Some(w) if w > 0 => prop_assert_eq!(style.width, Some(w)),
            _ => prop_assert_eq!(style.width, None),
        }
    }

    #[test]
    fn prop_painted_button_is_rectangular(
        label in "[a-zA-Z ]{0,24}",
        variant in button_variant(),
        size in size(),
        width in 0u16..40,
    ) {
        let button: Button<()> = Button::from_variant(variant, label).size(size).width(width);
        let out = button.render_with(Theme::builtin(), &AnsiPainter::plain());
        let body = out.strip_suffix('\n').unwrap_or(&out);

        let widths: Vec<usize> = body.split('\n').map(string_width).collect();
        prop_assert!(widths.windows(2).all(|w| w[0] == w[1]), "ragged rows: {:?}", widths);
    }

    #[test]
    fn prop_fixed_width_card_lines(
        content in "[a-z]{0,60}",
        width in 1u16..50,
    ) {
        let out = Card::new(content).width(width).render_with(Theme::builtin(), &AnsiPainter::plain());
        for line in out.split('\n') {
            // Border adds one cell on each side
            prop_assert_eq!(string_width(line), width as usize + 2);
        }
    }
}
