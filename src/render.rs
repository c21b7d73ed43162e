//! PDF backends that place laid out [`Line`]s onto a single page.
//!
//! The built-in backend drives printpdf directly with the standard Helvetica font, so it works
//! without any font files and keeps the text extractable. The embedded backend goes through genpdf
//! with a TrueType family from a [`FontProvider::Directory`](crate::fonts::FontProvider).

use std::io::BufWriter;

use genpdf::elements::{Break, Paragraph};
use genpdf::fonts::{FontData, FontFamily};
use genpdf::{Alignment, Mm, SimplePageDecorator, Size};
use log::debug;
use printpdf::{BuiltinFont, PdfDocument};

use crate::error::RenderError;
use crate::layout::{HorizontalAlignment, Line};
use crate::metrics;

/// Geometry and typography shared by both backends.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PageSettings {
    pub title: String,
    pub width_mm: f64,
    pub height_mm: f64,
    pub margin_mm: f64,
    pub font_size: u8,
    pub line_height_mm: f64,
}

const LAYER_NAME: &str = "Layer 1";

/// Share of the font size between the vertical centre of a row and its baseline.
const BASELINE_FONT_RATIO: f64 = 0.3;

fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

fn line_x(line: &Line, settings: &PageSettings) -> f64 {
    match line.alignment() {
        HorizontalAlignment::Left => settings.margin_mm,
        HorizontalAlignment::Center => {
            let available = settings.width_mm - 2.0 * settings.margin_mm;
            let width = metrics::text_width_mm(line.text(), settings.font_size);
            settings.margin_mm + ((available - width) / 2.0).max(0.0)
        }
    }
}

/// Renders `lines` with the built-in Helvetica font and returns the PDF bytes.
pub(crate) fn render_builtin(lines: &[Line], settings: &PageSettings) -> Result<Vec<u8>, RenderError> {
    let (document, page, layer) = PdfDocument::new(
        settings.title.as_str(),
        printpdf::Mm(settings.width_mm),
        printpdf::Mm(settings.height_mm),
        LAYER_NAME,
    );
    let layer = document.get_page(page).get_layer(layer);
    let font = document
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|err| RenderError::Pdf(err.to_string()))?;

    let baseline_offset = settings.line_height_mm / 2.0
        + BASELINE_FONT_RATIO * metrics::pt_to_mm(f64::from(settings.font_size));
    let mut row_top = settings.margin_mm;

    for line in lines {
        if !line.is_spacer() {
            let x = line_x(line, settings);
            let y = settings.height_mm - (row_top + baseline_offset);
            layer.use_text(
                line.text(),
                settings.font_size.into(),
                printpdf::Mm(x),
                printpdf::Mm(y),
                &font,
            );
        }
        row_top += settings.line_height_mm;
    }

    debug!(
        "Placed {} lines with the built-in {} font",
        lines.len(),
        crate::fonts::BUILTIN_FONT_NAME
    );

    let mut writer = BufWriter::new(Vec::new());
    document
        .save(&mut writer)
        .map_err(|err| RenderError::Pdf(err.to_string()))?;
    writer
        .into_inner()
        .map_err(|err| RenderError::Pdf(err.to_string()))
}

/// Renders `lines` with an embedded TrueType family through genpdf and returns the PDF bytes.
pub(crate) fn render_embedded(
    lines: &[Line],
    settings: &PageSettings,
    family: FontFamily<FontData>,
) -> Result<Vec<u8>, RenderError> {
    let mut document = genpdf::Document::new(family);
    document.set_title(settings.title.clone());
    document.set_paper_size(Size::new(
        mm_from_f64(settings.width_mm),
        mm_from_f64(settings.height_mm),
    ));
    document.set_font_size(settings.font_size);
    // genpdf spaces lines by the font size; stretch that to the configured row pitch.
    document.set_line_spacing(
        settings.line_height_mm / metrics::pt_to_mm(f64::from(settings.font_size)),
    );

    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(mm_from_f64(settings.margin_mm));
    document.set_page_decorator(decorator);

    for line in lines {
        if line.is_spacer() {
            document.push(Break::new(1));
            continue;
        }
        let alignment = match line.alignment() {
            HorizontalAlignment::Left => Alignment::Left,
            HorizontalAlignment::Center => Alignment::Center,
        };
        document.push(Paragraph::new(line.text().to_owned()).aligned(alignment));
    }

    let mut bytes = Vec::new();
    document.render(&mut bytes).map_err(RenderError::Layout)?;
    debug!("Rendered {} lines with an embedded font family", lines.len());
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{confirmation_lines, DEFAULT_BRAND, DEFAULT_CURRENCY_SYMBOL};
    use crate::record::BookingRecord;

    fn settings() -> PageSettings {
        PageSettings {
            title: "Test".to_string(),
            width_mm: 210.0,
            height_mm: 297.0,
            margin_mm: 10.0,
            font_size: 12,
            line_height_mm: 10.0,
        }
    }

    #[test]
    fn title_is_centred_between_margins() {
        let lines = confirmation_lines(&BookingRecord::new(), DEFAULT_BRAND, DEFAULT_CURRENCY_SYMBOL);
        let settings = settings();
        let title = &lines[0];

        let x = line_x(title, &settings);
        let width = metrics::text_width_mm(title.text(), settings.font_size);
        let right_gap = settings.width_mm - settings.margin_mm - (x + width);

        assert!((x - settings.margin_mm - right_gap).abs() < 1e-6);
        assert_eq!(line_x(&lines[2], &settings), settings.margin_mm);
    }

    #[test]
    fn builtin_backend_produces_a_pdf() {
        let lines = confirmation_lines(&BookingRecord::new(), DEFAULT_BRAND, DEFAULT_CURRENCY_SYMBOL);
        let bytes = render_builtin(&lines, &settings()).expect("render builtin");

        assert!(bytes.starts_with(b"%PDF-"));
    }
}
