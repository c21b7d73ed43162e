//! Configurable renderer for booking confirmations.

use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info};

use crate::confirmation::ensure_parent_directory;
use crate::error::RenderError;
use crate::fonts::{self, FontProvider};
use crate::layout::{self, Line};
use crate::metrics;
use crate::record::BookingRecord;
use crate::render::{self, PageSettings};

/// A4 paper, in millimetres.
const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;
const MARGIN_MM: f64 = 10.0;
const LINE_HEIGHT_MM: f64 = 10.0;
const DEFAULT_FONT_SIZE: u8 = 12;

/// Builder that renders [`BookingRecord`]s into confirmation PDFs.
///
/// The defaults reproduce the standard confirmation: 12pt Helvetica on A4 paper with 10 mm margins
/// and a 10 mm row pitch, branded "Tourtastic" with amounts in dollars.
#[derive(Clone, Debug, Default)]
pub struct ConfirmationBuilder {
    font_size: Option<u8>,
    brand: Option<String>,
    currency_symbol: Option<String>,
    font_provider: FontProvider,
}

impl ConfirmationBuilder {
    /// Creates a new builder instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the body font size in points.
    pub fn with_font_size(mut self, font_size: u8) -> Self {
        self.font_size = Some(font_size);
        self
    }

    /// Sets the brand named in the title and closing lines.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Sets the symbol printed in front of the amount.
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = Some(symbol.into());
        self
    }

    /// Selects the font used for the page text.
    pub fn with_font_provider(mut self, provider: FontProvider) -> Self {
        self.font_provider = provider;
        self
    }

    fn brand(&self) -> &str {
        self.brand.as_deref().unwrap_or(layout::DEFAULT_BRAND)
    }

    fn currency_symbol(&self) -> &str {
        self.currency_symbol
            .as_deref()
            .unwrap_or(layout::DEFAULT_CURRENCY_SYMBOL)
    }

    fn page_settings(&self) -> PageSettings {
        PageSettings {
            title: layout::title_text(self.brand()),
            width_mm: PAGE_WIDTH_MM,
            height_mm: PAGE_HEIGHT_MM,
            margin_mm: MARGIN_MM,
            font_size: self.font_size.unwrap_or(DEFAULT_FONT_SIZE),
            line_height_mm: LINE_HEIGHT_MM,
        }
    }

    /// Returns the lines that will be printed for `record`.
    pub fn lines(&self, record: &BookingRecord) -> Vec<Line> {
        layout::confirmation_lines(record, self.brand(), self.currency_symbol())
    }

    /// Renders `record` into PDF bytes without touching the filesystem.
    ///
    /// With the built-in font every line must be encodable in WinAnsi; otherwise
    /// [`RenderError::UnsupportedText`] names the first offending line.
    pub fn render(&self, record: &BookingRecord) -> Result<Vec<u8>, RenderError> {
        let lines = self.lines(record);
        let settings = self.page_settings();

        match &self.font_provider {
            FontProvider::Builtin => {
                ensure_win_ansi(&lines)?;
                render::render_builtin(&lines, &settings)
            }
            FontProvider::Directory { directory, family } => {
                let family =
                    fonts::load_font_family(directory, family).map_err(RenderError::Font)?;
                render::render_embedded(&lines, &settings, family)
            }
        }
    }

    /// Renders `record` and writes the document to `output_path`, creating missing parent
    /// directories first. Any existing file at the path is overwritten.
    ///
    /// Every failure is logged before it is returned.
    pub fn write(
        &self,
        record: &BookingRecord,
        output_path: impl AsRef<Path>,
    ) -> Result<PathBuf, RenderError> {
        let output_path = output_path.as_ref();
        self.write_document(record, output_path).map_err(|err| {
            error!("Error generating PDF at {}: {}", output_path.display(), err);
            err
        })
    }

    fn write_document(
        &self,
        record: &BookingRecord,
        output_path: &Path,
    ) -> Result<PathBuf, RenderError> {
        if output_path.as_os_str().is_empty() {
            return Err(RenderError::EmptyPath);
        }

        ensure_parent_directory(output_path)?;
        let bytes = self.render(record)?;

        fs::write(output_path, &bytes).map_err(|source| RenderError::Write {
            path: output_path.to_path_buf(),
            source,
        })?;

        info!(
            "PDF generated successfully at {} ({} bytes, font {})",
            output_path.display(),
            bytes.len(),
            self.font_provider.name()
        );
        Ok(output_path.to_path_buf())
    }
}

fn ensure_win_ansi(lines: &[Line]) -> Result<(), RenderError> {
    for line in lines {
        if let Some(character) = metrics::first_non_win_ansi_char(line.text()) {
            return Err(RenderError::UnsupportedText {
                line: line.text().to_owned(),
                character,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, Once, PoisonError};

    use super::*;

    static ERROR_LINES: Mutex<Vec<String>> = Mutex::new(Vec::new());

    struct ErrorCapture;

    impl log::Log for ErrorCapture {
        fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
            metadata.level() <= log::Level::Error
        }

        fn log(&self, record: &log::Record<'_>) {
            if self.enabled(record.metadata()) {
                ERROR_LINES
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: ErrorCapture = ErrorCapture;

    fn install_capture() {
        static INSTALL: Once = Once::new();
        INSTALL.call_once(|| {
            log::set_logger(&CAPTURE).expect("install capturing logger");
            log::set_max_level(log::LevelFilter::Error);
        });
    }

    /// Error lines mentioning `needle`; tests run in parallel so each filters by its own path.
    fn logged_errors_mentioning(needle: &str) -> Vec<String> {
        ERROR_LINES
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|line| line.contains(needle))
            .cloned()
            .collect()
    }

    #[test]
    fn defaults_match_standard_confirmation() {
        let settings = ConfirmationBuilder::new().page_settings();

        assert_eq!(settings.title, "Tourtastic - Booking Confirmation");
        assert_eq!(settings.width_mm, 210.0);
        assert_eq!(settings.height_mm, 297.0);
        assert_eq!(settings.margin_mm, 10.0);
        assert_eq!(settings.font_size, 12);
        assert_eq!(settings.line_height_mm, 10.0);
    }

    #[test]
    fn overrides_flow_into_page_settings() {
        let settings = ConfirmationBuilder::new()
            .with_font_size(10)
            .with_brand("Globetrot")
            .page_settings();

        assert_eq!(settings.title, "Globetrot - Booking Confirmation");
        assert_eq!(settings.font_size, 10);
    }

    #[test]
    fn empty_path_is_rejected() {
        let err = ConfirmationBuilder::new()
            .write(&BookingRecord::new(), "")
            .expect_err("empty path");

        assert!(matches!(err, RenderError::EmptyPath));
    }

    #[test]
    fn missing_font_directory_fails_before_writing() {
        install_capture();
        let directory = tempfile::tempdir().expect("create temp dir");
        let output = directory.path().join("confirm.pdf");

        let err = ConfirmationBuilder::new()
            .with_font_provider(FontProvider::directory(
                directory.path().join("fonts"),
                "NotoSans",
            ))
            .write(&BookingRecord::new(), &output)
            .expect_err("fonts are missing");

        assert!(matches!(err, RenderError::Font(_)), "{err}");
        assert!(!output.exists());

        let logged = logged_errors_mentioning(&output.display().to_string());
        assert_eq!(logged.len(), 1, "{logged:?}");
        assert!(logged[0].contains("Failed to load font family"), "{logged:?}");
    }

    #[test]
    fn text_outside_win_ansi_is_rejected_with_builtin_font() {
        install_capture();
        let directory = tempfile::tempdir().expect("create temp dir");
        let output = directory.path().join("tokyo.pdf");
        let record = BookingRecord::new().with_destination("東京");

        let err = ConfirmationBuilder::new()
            .write(&record, &output)
            .expect_err("destination cannot be encoded");

        match &err {
            RenderError::UnsupportedText { line, character } => {
                assert_eq!(line, "Destination: 東京");
                assert_eq!(*character, '東');
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!output.exists());
        assert_eq!(
            logged_errors_mentioning(&output.display().to_string()).len(),
            1
        );
    }

    #[test]
    fn win_ansi_punctuation_is_accepted() {
        let record = BookingRecord::new()
            .with_amount("€250")
            .with_customer_name("Ann-Marie O’Neil");

        let bytes = ConfirmationBuilder::new()
            .render(&record)
            .expect("render WinAnsi text");

        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn unsupported_brand_is_rejected_too() {
        let err = ConfirmationBuilder::new()
            .with_brand("旅行")
            .render(&BookingRecord::new())
            .expect_err("brand cannot be encoded");

        assert!(
            matches!(&err, RenderError::UnsupportedText { line, .. } if line.starts_with("旅行")),
            "{err}"
        );
    }
}
