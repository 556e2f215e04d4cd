//! Thin `genpdf` adapter for the document tree.
//!
//! The adapter maps the renderer-agnostic tree onto `genpdf` primitives and
//! produces the final PDF byte stream.  It is deliberately lossy where the
//! backend lacks a feature: `genpdf` tables have no per-row fills, dashed
//! rules or column spans, so rule sets collapse to a frame decorator and
//! spanned-over blank cells render as-is.  The [`crate::style::RuleSet`]
//! annotations on the tree remain the contract for richer backends.

use genpdf::elements::{FrameCellDecorator, Paragraph, TableLayout};
use genpdf::style as gstyle;
use genpdf::{Alignment, Element as _, Margins, PaperSize, Size};

use crate::document::{
    Cell, ColumnWidth, DocumentTree, HorizontalAlignment, Node, Orientation, PageSize, TableNode,
    TextNode, TextStyle,
};
use crate::elements::UnderlinedLabel;
use crate::error::Error;
use crate::fonts;
use crate::style::RuleSet;

const PAGE_MARGIN_MM: f64 = 15.0;

fn page_size(tree: &DocumentTree) -> Size {
    let size: Size = match tree.page.size {
        PageSize::A4 => PaperSize::A4.into(),
    };
    match tree.page.orientation {
        Orientation::Portrait => size,
        Orientation::Landscape => Size::new(size.height, size.width),
    }
}

fn alignment(value: HorizontalAlignment) -> Alignment {
    match value {
        HorizontalAlignment::Left => Alignment::Left,
        HorizontalAlignment::Center => Alignment::Center,
        HorizontalAlignment::Right => Alignment::Right,
    }
}

fn base_style(style: &TextStyle) -> gstyle::Style {
    let mut mapped = gstyle::Style::new().with_font_size(style.size);
    if style.bold {
        mapped.set_bold();
    }
    if style.italic {
        mapped.set_italic();
    }
    mapped
}

fn push_text(document: &mut genpdf::Document, tree: &DocumentTree, node: &TextNode) {
    let resolved = tree.resolve_style(node.style);
    let style = base_style(&resolved);
    let margins = Margins::trbl(0.0, 0.0, resolved.margin_bottom, 0.0);

    if resolved.underline {
        document.push(UnderlinedLabel::new(node.text.clone(), style).padded(margins));
    } else {
        let mut paragraph = Paragraph::new(node.text.clone());
        paragraph.set_alignment(alignment(resolved.alignment));
        document.push(paragraph.styled(style).padded(margins));
    }
}

fn column_weight(width: ColumnWidth) -> usize {
    match width {
        ColumnWidth::Auto => 1,
        ColumnWidth::Fill => 3,
        ColumnWidth::Fixed(mm) => ((mm / 30.0).round() as usize).max(1),
    }
}

fn cell_element(cell: &Cell, rules: RuleSet, row_index: usize) -> impl genpdf::Element {
    let mut style = gstyle::Style::new();
    if cell.bold {
        style.set_bold();
    }
    let top = rules.padding_top(row_index) + cell.margin_top.unwrap_or(0.0);
    let bottom = rules.padding_bottom(row_index);
    Paragraph::new(cell.text.clone())
        .styled(style)
        .padded(Margins::trbl(top, 1.0, bottom, 1.0))
}

fn table_element(table: &TableNode) -> Result<TableLayout, Error> {
    let weights: Vec<usize> = table.widths.iter().copied().map(column_weight).collect();
    let mut layout = TableLayout::new(weights);

    let row_count = table.rows.len();
    if table.rules.has_vertical_rules() {
        layout.set_cell_decorator(FrameCellDecorator::new(true, true, false));
    } else if table.rules.draws_rules(row_count) {
        layout.set_cell_decorator(FrameCellDecorator::new(false, true, false));
    }

    for (row_index, row) in table.rows.iter().enumerate() {
        let mut builder = layout.row();
        for cell in &row.0 {
            builder = builder.element(cell_element(cell, table.rules, row_index));
        }
        builder.push()?;
    }
    Ok(layout)
}

/// Renders a document tree into PDF bytes.
pub fn render_pdf(tree: &DocumentTree) -> Result<Vec<u8>, Error> {
    let family = fonts::default_font_family()?;
    let mut document = genpdf::Document::new(family);
    document.set_paper_size(page_size(tree));
    document.set_line_spacing(tree.page.line_height);
    document.set_font_size(tree.page.base_font_size);

    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(Margins::trbl(
        PAGE_MARGIN_MM,
        PAGE_MARGIN_MM,
        PAGE_MARGIN_MM,
        PAGE_MARGIN_MM,
    ));
    document.set_page_decorator(decorator);

    for node in &tree.content {
        match node {
            Node::Text(text) => push_text(&mut document, tree, text),
            Node::Table(table) => {
                if table.rows.is_empty() {
                    // genpdf rejects empty tables; an empty follow-up log
                    // simply contributes nothing.
                    continue;
                }
                let element = table_element(table)?;
                document.push(element.padded(Margins::trbl(
                    table.spacing.top,
                    0.0,
                    table.spacing.bottom,
                    0.0,
                )));
            }
        }
    }

    let mut bytes = Vec::new();
    document.render(&mut bytes)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_weights_scale_with_width() {
        assert_eq!(column_weight(ColumnWidth::Auto), 1);
        assert_eq!(column_weight(ColumnWidth::Fill), 3);
        assert_eq!(column_weight(ColumnWidth::Fixed(90.0)), 3);
        assert_eq!(column_weight(ColumnWidth::Fixed(5.0)), 1);
    }
}
