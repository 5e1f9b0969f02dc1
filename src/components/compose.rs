//! Content composition.
//!
//! Multi-part components build their content from ordered [`Section`]s.
//! Each non-empty section is painted in its own style and the results are
//! stacked with single line breaks, so absent sections leave no blank rows.

use crate::renderer::Paint;
use crate::style::StyleAttributes;

/// One piece of composed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    pub text: &'a str,
    pub style: StyleAttributes,
}

impl<'a> Section<'a> {
    pub const fn new(text: &'a str, style: StyleAttributes) -> Self {
        Self { text, style }
    }

    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Paint each non-empty section and join them with `"\n"`.
///
/// Returns an empty string when every section is empty.
pub fn compose<P: Paint + ?Sized>(sections: &[Section<'_>], painter: &P) -> String {
    sections
        .iter()
        .filter(|section| !section.is_empty())
        .map(|section| painter.paint(&section.style, section.text))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::AnsiPainter;

    fn tagged(style: &StyleAttributes, text: &str) -> String {
        if style.is_bold() {
            format!("<b>{text}</b>")
        } else {
            text.to_string()
        }
    }

    #[test]
    fn test_skips_empty_sections() {
        let bold = StyleAttributes::new().bold();
        let plain = StyleAttributes::new();
        let sections = [
            Section::new("Title", bold),
            Section::new("", plain),
            Section::new("Body", plain),
        ];
        assert_eq!(compose(&sections, &tagged), "<b>Title</b>\nBody");
    }

    #[test]
    fn test_all_empty() {
        let plain = StyleAttributes::new();
        let sections = [Section::new("", plain), Section::new("", plain)];
        assert_eq!(compose(&sections, &AnsiPainter::plain()), "");
        assert_eq!(compose(&[], &AnsiPainter::plain()), "");
    }

    #[test]
    fn test_section_margins_are_kept() {
        let footer = StyleAttributes::new().with_margin_top(1);
        let sections = [
            Section::new("Body", StyleAttributes::new()),
            Section::new("note", footer),
        ];
        assert_eq!(compose(&sections, &AnsiPainter::plain()), "Body\n\nnote");
    }

    #[test]
    fn test_single_section_has_no_separator() {
        let sections = [Section::new("only", StyleAttributes::new())];
        assert_eq!(compose(&sections, &AnsiPainter::plain()), "only");
    }
}
