//! Custom `genpdf` elements used by the rendering adapter.
//!
//! `genpdf` has no native underline support, so the section labels above the
//! data tables are drawn as a styled line of text with a thin stroke rendered
//! underneath.

use genpdf::style::{Style, StyledString};
use genpdf::{render, Element, Mm, Position, RenderResult, Size};

const DEFAULT_UNDERLINE_OFFSET_MM: f64 = 0.4;

fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

/// A single-line label rendered with an underline stroke.
pub struct UnderlinedLabel {
    text: String,
    style: Style,
    underline_offset: Mm,
}

impl UnderlinedLabel {
    /// Creates a label with the given text and style.
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            underline_offset: mm_from_f64(DEFAULT_UNDERLINE_OFFSET_MM),
        }
    }

    /// Sets the distance between the baseline and the underline stroke.
    pub fn with_underline_offset(mut self, offset: Mm) -> Self {
        self.underline_offset = offset;
        self
    }
}

impl Element for UnderlinedLabel {
    fn render(
        &mut self,
        context: &genpdf::Context,
        mut area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, genpdf::error::Error> {
        let string = StyledString::new(self.text.clone(), style.and(self.style));
        let style = string.style;
        let line_height = style.line_height(&context.font_cache);
        let glyph_height = style
            .font(&context.font_cache)
            .glyph_height(style.font_size());
        let width = string.width(&context.font_cache);

        let mut result = RenderResult::default();
        if line_height > area.size().height {
            result.has_more = true;
            return Ok(result);
        }

        if let Some(mut section) =
            area.text_section(&context.font_cache, Position::new(0, 0), style)
        {
            section.print_str(&self.text, style)?;
        } else {
            result.has_more = true;
            return Ok(result);
        }

        let baseline = glyph_height + self.underline_offset;
        let mut line_style = Style::new();
        if let Some(color) = style.color() {
            line_style = line_style.with_color(color);
        }
        area.draw_line(
            vec![Position::new(0, baseline), Position::new(width, baseline)],
            line_style,
        );

        result.size = Size::new(width, line_height);
        area.add_offset(Position::new(0, line_height));

        Ok(result)
    }
}
