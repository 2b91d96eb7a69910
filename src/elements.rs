//! Mapping from [`ContentBlock`] values to `genpdf` elements.
//!
//! This module owns the layout constants of the rendered report (bullet
//! glyph, table column split, cell padding) and a custom table cell
//! decorator that draws the light-gray grid the persona table uses.

use genpdf::elements::{Break, CellDecorator, Paragraph, TableLayout, UnorderedList};
use genpdf::error::Error;
use genpdf::style::{Color, Style};
use genpdf::{render, Document, Element, Margins, Mm, Position};

use crate::content::ContentBlock;
use crate::style::{mm_from_pt, StyleName, StyleSet, TextStyle};

const BULLET_GLYPH: &str = "\u{2022}";
const BULLET_FONT_SIZE: u8 = 8;
const GRID_LINE_COLOR: Color = Color::Rgb(0xcb, 0xd5, 0xe1);
const CELL_PADDING_PT: f64 = 5.0;

/// Relative column weights of the key/value table (48 mm : 130 mm in the
/// rendered layout).
const TABLE_COLUMN_WEIGHTS: [usize; 2] = [48, 130];

/// Converts a single block into an element and pushes it onto the document.
pub fn realize_into(
    document: &mut Document,
    block: &ContentBlock,
    styles: &StyleSet,
) -> Result<(), Error> {
    match block {
        ContentBlock::Heading(text) => {
            document.push(styled_paragraph(text, styles.get(StyleName::SectionHeading)));
        }
        ContentBlock::Paragraph { style, text } => {
            document.push(styled_paragraph(text, styles.get(*style)));
        }
        ContentBlock::BulletList(items) => {
            document.push(bullet_list(items, &styles.body));
        }
        ContentBlock::KeyValueTable(rows) => {
            document.push(key_value_table(rows, &styles.body)?);
        }
        ContentBlock::Spacer(lines) => {
            document.push(Break::new(*lines));
        }
    }
    Ok(())
}

fn styled_paragraph(text: &str, style: &TextStyle) -> impl Element {
    Paragraph::new(text.to_string())
        .styled(style.to_style())
        .padded(style.spacing())
}

fn bullet_list(items: &[String], body: &TextStyle) -> impl Element {
    let mut list = UnorderedList::with_bullet(BULLET_GLYPH);
    for item in items {
        list.push(Paragraph::new(item.clone()).styled(body.to_style()));
    }

    // The list-level style only reaches the bullet glyphs; the item
    // paragraphs carry their own explicit style.
    let glyph_style = Style::new().with_font_size(BULLET_FONT_SIZE);
    list.styled(glyph_style).padded(Margins::trbl(
        mm_from_pt(1.0),
        Mm::from(0),
        mm_from_pt(1.0),
        Mm::from(0),
    ))
}

fn key_value_table(rows: &[(String, String)], body: &TextStyle) -> Result<TableLayout, Error> {
    let mut table = TableLayout::new(TABLE_COLUMN_WEIGHTS.to_vec());
    table.set_cell_decorator(GridCellDecorator::new(GRID_LINE_COLOR));

    let padding = Margins::all(mm_from_pt(CELL_PADDING_PT));
    for (key, value) in rows {
        table
            .row()
            .element(
                Paragraph::new(key.clone())
                    .styled(body.to_style())
                    .padded(padding),
            )
            .element(
                Paragraph::new(value.clone())
                    .styled(body.to_style())
                    .padded(padding),
            )
            .push()?;
    }

    Ok(table)
}

/// Cell decorator that frames every cell with thin colored lines.
///
/// Follows the shape of `genpdf`'s `FrameCellDecorator`, but draws all four
/// edges in a fixed color.  Cell padding comes from padding the cell elements
/// themselves.
struct GridCellDecorator {
    line_color: Color,
}

impl GridCellDecorator {
    fn new(line_color: Color) -> Self {
        Self { line_color }
    }
}

impl CellDecorator for GridCellDecorator {
    fn decorate_cell(
        &mut self,
        _column: usize,
        _row: usize,
        _has_more: bool,
        area: render::Area<'_>,
        _style: Style,
    ) {
        let size = area.size();
        let line_style = Style::new().with_color(self.line_color);

        area.draw_line(
            vec![
                Position::new(0, 0),
                Position::new(size.width, 0),
                Position::new(size.width, size.height),
                Position::new(0, size.height),
                Position::new(0, 0),
            ],
            line_style,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleSet;

    #[test]
    fn key_value_table_accepts_persona_rows() {
        let styles = StyleSet::document_default();
        let rows = vec![
            ("Primary persona".to_string(), "School staff.".to_string()),
            ("Documentation".to_string(), "Not found in repo.".to_string()),
        ];
        assert!(key_value_table(&rows, &styles.body).is_ok());
    }
}
