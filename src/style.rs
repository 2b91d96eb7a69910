//! Named paragraph styles for the summary document.
//!
//! Every style is a plain record copied from a base record with a handful of
//! fields overridden, so there is no style-sheet inheritance chain to walk at
//! render time.

use genpdf::style::{Color, Style};
use genpdf::{Margins, Mm};

const MM_PER_PT: f64 = 25.4 / 72.0;

/// Converts a length in typographic points to the millimetre unit used by `genpdf`.
pub fn mm_from_pt(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value * MM_PER_PT))
}

/// Identifies one of the named styles in a [`StyleSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleName {
    /// Document title line.
    Title,
    /// Provenance line directly under the title.
    Subtitle,
    /// Bold heading introducing a section.
    SectionHeading,
    /// Regular prose, list items and table cells.
    Body,
    /// Italic closing note.
    SmallPrint,
}

/// Font and spacing attributes applied to a block of text.
///
/// Sizes and leading are in points, spacing in points before/after the block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: u8,
    pub leading: f64,
    pub color: Color,
    pub bold: bool,
    pub italic: bool,
    pub space_before: f64,
    pub space_after: f64,
}

impl TextStyle {
    /// The base record all named styles are derived from (regular 9 pt prose).
    pub fn base() -> Self {
        Self {
            size: 9,
            leading: 11.0,
            color: Color::Rgb(0x11, 0x18, 0x27),
            bold: false,
            italic: false,
            space_before: 0.0,
            space_after: 1.0,
        }
    }

    /// Maps the record onto a `genpdf` character style.
    pub fn to_style(&self) -> Style {
        let mut style = Style::new();
        style.set_font_size(self.size);
        style.set_line_spacing(self.leading / f64::from(self.size));
        style.set_color(self.color);
        if self.bold {
            style.set_bold();
        }
        if self.italic {
            style.set_italic();
        }
        style
    }

    /// Vertical margins that realize the before/after spacing of the record.
    pub fn spacing(&self) -> Margins {
        Margins::trbl(
            mm_from_pt(self.space_before),
            Mm::from(0),
            mm_from_pt(self.space_after),
            Mm::from(0),
        )
    }
}

/// The full set of named styles used by the summary document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleSet {
    pub title: TextStyle,
    pub subtitle: TextStyle,
    pub section_heading: TextStyle,
    pub body: TextStyle,
    pub small_print: TextStyle,
}

impl StyleSet {
    /// Builds the style set used for the app summary.
    pub fn document_default() -> Self {
        let base = TextStyle::base();
        Self {
            title: TextStyle {
                size: 17,
                leading: 20.0,
                color: Color::Rgb(0x0f, 0x17, 0x2a),
                bold: true,
                space_after: 4.0,
                ..base
            },
            subtitle: TextStyle {
                leading: 12.0,
                color: Color::Rgb(0x33, 0x41, 0x55),
                space_after: 7.0,
                ..base
            },
            section_heading: TextStyle {
                size: 11,
                leading: 13.0,
                color: Color::Rgb(0x0b, 0x3a, 0x53),
                bold: true,
                space_before: 4.0,
                space_after: 2.0,
                ..base
            },
            body: base,
            small_print: TextStyle {
                size: 8,
                leading: 10.0,
                color: Color::Rgb(0x47, 0x55, 0x69),
                italic: true,
                space_before: 4.0,
                space_after: 0.0,
                ..base
            },
        }
    }

    /// Resolves a style by name.
    pub fn get(&self, name: StyleName) -> &TextStyle {
        match name {
            StyleName::Title => &self.title,
            StyleName::Subtitle => &self.subtitle,
            StyleName::SectionHeading => &self.section_heading,
            StyleName::Body => &self.body,
            StyleName::SmallPrint => &self.small_print,
        }
    }
}

impl Default for StyleSet {
    fn default() -> Self {
        Self::document_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_styles_override_base_fields() {
        let styles = StyleSet::document_default();
        assert_eq!(styles.title.size, 17);
        assert!(styles.title.bold);
        assert!(!styles.title.italic);
        assert_eq!(styles.body, TextStyle::base());
        assert!(styles.small_print.italic);
        assert_eq!(styles.small_print.size, 8);
    }

    #[test]
    fn to_style_carries_flags_and_size() {
        let styles = StyleSet::document_default();
        let heading = styles.section_heading.to_style();
        assert!(heading.is_bold());
        assert!(!heading.is_italic());
        assert_eq!(heading.font_size(), 11);
        assert_eq!(heading.color(), Some(Color::Rgb(0x0b, 0x3a, 0x53)));
    }

    #[test]
    fn lookup_by_name_matches_fields() {
        let styles = StyleSet::document_default();
        assert_eq!(styles.get(StyleName::Body), &styles.body);
        assert_eq!(styles.get(StyleName::Subtitle), &styles.subtitle);
    }
}
