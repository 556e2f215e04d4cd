//! The page-level document tree handed to a renderer.
//!
//! This is a renderer-agnostic description of the finished report: ordered
//! text and table nodes plus page metadata and a small set of named text
//! styles.  Keeping the tree free of rendering types lets the composer and
//! the row builders be tested by structural equality, and lets different
//! backends consume the same tree.

use crate::style::RuleSet;

/// Horizontal alignment for text nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// A single table cell with its inline annotations.
///
/// Spanned-over positions are still present as blank cells, so every row of a
/// table carries the same number of cells regardless of spans.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub text: String,
    /// Number of columns the cell occupies.  `1` for ordinary cells.
    pub span: usize,
    pub bold: bool,
    /// Extra space above the cell content, in millimetres.
    pub margin_top: Option<f64>,
}

impl Cell {
    /// Creates an ordinary single-column cell.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            span: 1,
            bold: false,
            margin_top: None,
        }
    }

    /// Creates a cell spanning `span` columns.
    pub fn spanned(text: impl Into<String>, span: usize) -> Self {
        Self {
            span,
            ..Self::new(text)
        }
    }

    /// Creates an empty placeholder cell.
    pub fn blank() -> Self {
        Self::new("")
    }

    /// Marks the cell as bold and returns it.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Sets the extra top margin and returns the cell.
    pub fn with_margin_top(mut self, margin_top: f64) -> Self {
        self.margin_top = Some(margin_top);
        self
    }
}

/// An ordered list of cells.
#[derive(Clone, Debug, PartialEq)]
pub struct Row(pub Vec<Cell>);

impl Row {
    /// Builds a row of plain cells from string slices.
    pub fn from_texts<'a>(texts: impl IntoIterator<Item = &'a str>) -> Self {
        Row(texts.into_iter().map(Cell::new).collect())
    }

    /// Number of cells in the row (spans count as one cell).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the row contains no cells.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Column sizing hint for a table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColumnWidth {
    /// Size to content.
    Auto,
    /// Absorb the remaining width.
    Fill,
    /// Fixed width in millimetres.
    Fixed(f64),
}

/// Vertical space reserved above and below a table, in millimetres.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spacing {
    pub top: f64,
    pub bottom: f64,
}

impl Spacing {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }
}

/// A table node: columns, rows and the rule set that styles it.
#[derive(Clone, Debug, PartialEq)]
pub struct TableNode {
    pub widths: Vec<ColumnWidth>,
    pub rows: Vec<Row>,
    pub rules: RuleSet,
    pub spacing: Spacing,
}

/// Reference to one of the document's text styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyleRef {
    Header,
    Subheader,
    SectionLabel,
    Contact,
    /// Default body text at the page's base size.
    Body,
}

/// A block of text rendered with a named style.
#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    pub text: String,
    pub style: TextStyleRef,
}

/// One entry in the document content sequence.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Text(TextNode),
    Table(TableNode),
}

impl Node {
    /// Convenience helper for building a text node.
    pub fn text(text: impl Into<String>, style: TextStyleRef) -> Self {
        Node::Text(TextNode {
            text: text.into(),
            style,
        })
    }
}

/// Resolved attributes of a text style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: u8,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub alignment: HorizontalAlignment,
    /// Space below the block, in millimetres.
    pub margin_bottom: f64,
}

impl TextStyle {
    fn plain(size: u8) -> Self {
        Self {
            size,
            bold: false,
            italic: false,
            underline: false,
            alignment: HorizontalAlignment::Left,
            margin_bottom: 0.0,
        }
    }
}

/// The named text styles referenced by [`TextStyleRef`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NamedStyles {
    pub header: TextStyle,
    pub subheader: TextStyle,
    pub section_label: TextStyle,
    pub contact: TextStyle,
}

impl Default for NamedStyles {
    fn default() -> Self {
        Self {
            header: TextStyle {
                bold: true,
                alignment: HorizontalAlignment::Center,
                ..TextStyle::plain(14)
            },
            subheader: TextStyle {
                bold: true,
                alignment: HorizontalAlignment::Center,
                ..TextStyle::plain(14)
            },
            section_label: TextStyle {
                bold: true,
                underline: true,
                ..TextStyle::plain(12)
            },
            contact: TextStyle {
                italic: true,
                alignment: HorizontalAlignment::Center,
                margin_bottom: 20.0,
                ..TextStyle::plain(10)
            },
        }
    }
}

/// Fixed page formats supported by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageSize {
    #[default]
    A4,
}

/// Page orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Page format and default typography for the whole document.
#[derive(Clone, Debug, PartialEq)]
pub struct PageSettings {
    pub size: PageSize,
    pub orientation: Orientation,
    pub font_family: String,
    pub line_height: f64,
    pub base_font_size: u8,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            size: PageSize::A4,
            orientation: Orientation::Portrait,
            font_family: crate::fonts::DEFAULT_FONT_FAMILY_NAME.to_string(),
            line_height: 1.15,
            base_font_size: 10,
        }
    }
}

/// The finished, immutable document tree.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentTree {
    pub page: PageSettings,
    pub styles: NamedStyles,
    pub content: Vec<Node>,
}

impl DocumentTree {
    /// Resolves a style reference against the document's named styles.
    pub fn resolve_style(&self, style: TextStyleRef) -> TextStyle {
        match style {
            TextStyleRef::Header => self.styles.header,
            TextStyleRef::Subheader => self.styles.subheader,
            TextStyleRef::SectionLabel => self.styles.section_label,
            TextStyleRef::Contact => self.styles.contact,
            TextStyleRef::Body => TextStyle::plain(self.page.base_font_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_builders_set_annotations() {
        let cell = Cell::spanned("Name", 2).bold();
        assert_eq!(cell.span, 2);
        assert!(cell.bold);
        assert_eq!(cell.margin_top, None);

        let cell = Cell::new("note").with_margin_top(5.0);
        assert_eq!(cell.span, 1);
        assert_eq!(cell.margin_top, Some(5.0));
    }

    #[test]
    fn default_page_settings_match_report_defaults() {
        let page = PageSettings::default();
        assert_eq!(page.size, PageSize::A4);
        assert_eq!(page.orientation, Orientation::Portrait);
        assert!((page.line_height - 1.15).abs() < f64::EPSILON);
    }

    #[test]
    fn named_styles_resolve_through_the_tree() {
        let tree = DocumentTree {
            page: PageSettings::default(),
            styles: NamedStyles::default(),
            content: Vec::new(),
        };
        let header = tree.resolve_style(TextStyleRef::Header);
        assert_eq!(header.size, 14);
        assert!(header.bold);
        assert_eq!(header.alignment, HorizontalAlignment::Center);

        let label = tree.resolve_style(TextStyleRef::SectionLabel);
        assert!(label.underline);

        let body = tree.resolve_style(TextStyleRef::Body);
        assert_eq!(body.size, tree.page.base_font_size);
    }
}
