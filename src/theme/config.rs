//! Palette configuration.
//!
//! A TOML palette patches entries of the built-in [`Theme`]. Every field is
//! optional; anything not named keeps its built-in value.
//!
//! ```toml
//! [button.variants.primary]
//! background = "28"
//! border_color = "28"
//!
//! [button.sizes]
//! large = [1, 6]
//!
//! [button.states.focused]
//! border_color = "#00ff00"
//!
//! [card.variants.muted]
//! border = "single"
//!
//! [sections.footer]
//! foreground = "245"
//! dim = true
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

use super::{SectionStyles, Theme};
use crate::style::table::VariantKey;
use crate::style::{ColorOverride, InteractionState, Padding, Size, StyleAttributes, StyleTable};
use crate::types::{Attr, BorderStyle, Color};

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while loading a palette.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// Palette file could not be read
    #[error("failed to read palette: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("palette parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Color string is not an ANSI index, `#hex` or `default`
    #[error("invalid color '{value}' for {field}")]
    InvalidColor { field: String, value: String },

    /// Border name is not one of none/single/double/rounded
    #[error("unknown border style '{0}'")]
    UnknownBorder(String),

    /// Table key does not name a variant, size or state
    #[error("unknown {kind} '{name}'")]
    UnknownKey { kind: &'static str, name: String },
}

/// Result type for palette operations
pub type Result<T> = std::result::Result<T, PaletteError>;

// =============================================================================
// Config shapes
// =============================================================================

/// Root of a palette file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    #[serde(default)]
    pub button: TableConfig,
    #[serde(default)]
    pub card: TableConfig,
    #[serde(default)]
    pub sections: SectionsConfig,
}

/// Patch for one component's [`StyleTable`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    #[serde(default)]
    pub variants: BTreeMap<String, StyleConfig>,
    /// `[vertical, horizontal]` padding per size
    #[serde(default)]
    pub sizes: BTreeMap<String, [u16; 2]>,
    #[serde(default)]
    pub states: BTreeMap<String, ColorConfig>,
}

/// Patch for one [`StyleAttributes`] value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    pub foreground: Option<String>,
    pub background: Option<String>,
    pub border_color: Option<String>,
    pub border: Option<String>,
    pub padding: Option<[u16; 2]>,
    pub margin_top: Option<u16>,
    pub margin_bottom: Option<u16>,
    pub bold: Option<bool>,
    pub dim: Option<bool>,
}

/// Colors a state may override.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorConfig {
    pub foreground: Option<String>,
    pub background: Option<String>,
    pub border_color: Option<String>,
}

/// Patches for the card sections.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionsConfig {
    pub header: Option<StyleConfig>,
    pub content: Option<StyleConfig>,
    pub footer: Option<StyleConfig>,
}

impl ThemeConfig {
    /// Parse a palette from TOML text.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }
}

// =============================================================================
// Applying
// =============================================================================

fn parse_color(field: &str, value: &str) -> Result<Color> {
    Color::parse(value).ok_or_else(|| PaletteError::InvalidColor {
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn parse_optional_color(field: &str, value: Option<&String>) -> Result<Option<Color>> {
    value.map(|v| parse_color(field, v)).transpose()
}

impl StyleConfig {
    /// Apply this patch on top of `style`.
    pub fn apply(&self, field: &str, mut style: StyleAttributes) -> Result<StyleAttributes> {
        if let Some(fg) = parse_optional_color(&format!("{field}.foreground"), self.foreground.as_ref())? {
            style.foreground = fg;
        }
        if let Some(bg) = parse_optional_color(&format!("{field}.background"), self.background.as_ref())? {
            style.background = bg;
        }
        if let Some(border) =
            parse_optional_color(&format!("{field}.border_color"), self.border_color.as_ref())?
        {
            style.border_color = border;
        }
        if let Some(name) = &self.border {
            style.border = BorderStyle::from_name(name)
                .ok_or_else(|| PaletteError::UnknownBorder(name.clone()))?;
        }
        if let Some([vertical, horizontal]) = self.padding {
            style.padding = Padding::new(vertical, horizontal);
        }
        if let Some(lines) = self.margin_top {
            style.margin_top = lines;
        }
        if let Some(lines) = self.margin_bottom {
            style.margin_bottom = lines;
        }
        if let Some(bold) = self.bold {
            style.attrs.set(Attr::BOLD, bold);
        }
        if let Some(dim) = self.dim {
            style.attrs.set(Attr::DIM, dim);
        }
        Ok(style)
    }
}

impl ColorConfig {
    /// Apply this patch on top of an existing state override.
    pub fn apply(&self, field: &str, mut colors: ColorOverride) -> Result<ColorOverride> {
        if let Some(fg) = parse_optional_color(&format!("{field}.foreground"), self.foreground.as_ref())? {
            colors.foreground = Some(fg);
        }
        if let Some(bg) = parse_optional_color(&format!("{field}.background"), self.background.as_ref())? {
            colors.background = Some(bg);
        }
        if let Some(border) =
            parse_optional_color(&format!("{field}.border_color"), self.border_color.as_ref())?
        {
            colors.border_color = Some(border);
        }
        Ok(colors)
    }
}

impl TableConfig {
    /// Apply this patch to `table`. `component` prefixes field names in
    /// error messages.
    pub fn apply<V: VariantKey>(&self, component: &str, table: &mut StyleTable<V>) -> Result<()> {
        for (name, patch) in &self.variants {
            let variant = V::from_name(name).ok_or_else(|| PaletteError::UnknownKey {
                kind: "variant",
                name: name.clone(),
            })?;
            let field = format!("{component}.variants.{name}");
            let patched = patch.apply(&field, table.base(variant))?;
            *table.variant_mut(variant) = patched;
        }

        for (name, [vertical, horizontal]) in &self.sizes {
            let size = Size::from_name(name).ok_or_else(|| PaletteError::UnknownKey {
                kind: "size",
                name: name.clone(),
            })?;
            table.set_size(size, Padding::new(*vertical, *horizontal));
        }

        for (name, patch) in &self.states {
            let state = InteractionState::from_name(name).ok_or_else(|| PaletteError::UnknownKey {
                kind: "state",
                name: name.clone(),
            })?;
            let field = format!("{component}.states.{name}");
            let current = table.state(state).unwrap_or(ColorOverride::NONE);
            table.set_state(state, patch.apply(&field, current)?);
        }

        Ok(())
    }
}

impl SectionsConfig {
    pub fn apply(&self, sections: &mut SectionStyles) -> Result<()> {
        if let Some(patch) = &self.header {
            sections.header = patch.apply("sections.header", sections.header)?;
        }
        if let Some(patch) = &self.content {
            sections.content = patch.apply("sections.content", sections.content)?;
        }
        if let Some(patch) = &self.footer {
            sections.footer = patch.apply("sections.footer", sections.footer)?;
        }
        Ok(())
    }
}

impl Theme {
    /// Return a copy of this theme with `config` applied.
    ///
    /// Leaves `self` untouched if any entry is invalid.
    pub fn patched(&self, config: &ThemeConfig) -> Result<Theme> {
        let mut theme = self.clone();
        config.button.apply("button", &mut theme.button)?;
        config.card.apply("card", &mut theme.card)?;
        config.sections.apply(&mut theme.sections)?;
        Ok(theme)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ButtonVariant, CardVariant};

    #[test]
    fn test_empty_config_is_identity() {
        let config = ThemeConfig::from_toml_str("").unwrap();
        assert_eq!(config, ThemeConfig::default());

        let theme = Theme::default().patched(&config).unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_variant_patch_keeps_unnamed_fields() {
        let config = ThemeConfig::from_toml_str(
            r#"
            [button.variants.primary]
            background = "28"
            bold = true
            "#,
        )
        .unwrap();
        let theme = Theme::default().patched(&config).unwrap();
        let primary = theme.button.base(ButtonVariant::Primary);
        let builtin = Theme::default().button.base(ButtonVariant::Primary);

        assert_eq!(primary.background, Color::ansi(28));
        assert!(primary.is_bold());
        assert_eq!(primary.foreground, builtin.foreground);
        assert_eq!(primary.border, builtin.border);
    }

    #[test]
    fn test_size_and_state_patch() {
        let config = ThemeConfig::from_toml_str(
            r##"
            [card.sizes]
            large = [3, 6]

            [card.states.focused]
            border_color = "#00ff00"
            "##,
        )
        .unwrap();
        let theme = Theme::default().patched(&config).unwrap();

        assert_eq!(theme.card.size(Size::Large), Some(Padding::new(3, 6)));
        let focused = theme.card.state(InteractionState::Focused).unwrap();
        assert_eq!(focused.border_color, Some(Color::rgb(0, 255, 0)));
    }

    #[test]
    fn test_border_patch() {
        let config = ThemeConfig::from_toml_str(
            r#"
            [card.variants.muted]
            border = "double"
            "#,
        )
        .unwrap();
        let theme = Theme::default().patched(&config).unwrap();
        assert_eq!(theme.card.base(CardVariant::Muted).border, BorderStyle::Double);
    }

    #[test]
    fn test_section_patch() {
        let config = ThemeConfig::from_toml_str(
            r#"
            [sections.footer]
            foreground = "245"
            margin_top = 0
            dim = true
            "#,
        )
        .unwrap();
        let theme = Theme::default().patched(&config).unwrap();
        assert_eq!(theme.sections.footer.foreground, Color::ansi(245));
        assert_eq!(theme.sections.footer.margin_top, 0);
        assert!(theme.sections.footer.attrs.contains(Attr::DIM));
        assert!(theme.sections.header.is_bold());
    }

    #[test]
    fn test_invalid_color_is_reported() {
        let config = ThemeConfig::from_toml_str(
            r#"
            [button.variants.ghost]
            foreground = "chartreuse"
            "#,
        )
        .unwrap();
        let err = Theme::default().patched(&config).unwrap_err();
        match err {
            PaletteError::InvalidColor { field, value } => {
                assert_eq!(field, "button.variants.ghost.foreground");
                assert_eq!(value, "chartreuse");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_keys_are_reported() {
        let config = ThemeConfig::from_toml_str(
            r#"
            [button.variants.outline]
            foreground = "15"
            "#,
        )
        .unwrap();
        assert!(matches!(
            Theme::default().patched(&config),
            Err(PaletteError::UnknownKey { kind: "variant", .. })
        ));

        let config = ThemeConfig::from_toml_str("[card.sizes]\nhuge = [4, 8]\n").unwrap();
        assert!(matches!(
            Theme::default().patched(&config),
            Err(PaletteError::UnknownKey { kind: "size", .. })
        ));

        let config = ThemeConfig::from_toml_str("[card.states.hover]\nforeground = \"1\"\n").unwrap();
        assert!(matches!(
            Theme::default().patched(&config),
            Err(PaletteError::UnknownKey { kind: "state", .. })
        ));
    }

    #[test]
    fn test_unknown_border_is_reported() {
        let config = ThemeConfig::from_toml_str(
            r#"
            [card.variants.primary]
            border = "dashed"
            "#,
        )
        .unwrap();
        assert!(matches!(
            Theme::default().patched(&config),
            Err(PaletteError::UnknownBorder(name)) if name == "dashed"
        ));
    }

    #[test]
    fn test_unknown_fields_rejected_by_parser() {
        let result = ThemeConfig::from_toml_str(
            r#"
            [button.variants.primary]
            colour = "15"
            "#,
        );
        assert!(matches!(result, Err(PaletteError::Parse(_))));
    }
}
