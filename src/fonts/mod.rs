//! Font selection for confirmation documents.
//!
//! By default documents are set in the built-in PDF Helvetica font, which needs no font files but
//! only covers Latin text. A [`FontProvider::Directory`] embeds a TrueType family instead, which is
//! the way to render customer names or destinations in other scripts.

use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::Error;
use genpdf::fonts::{self, FontData, FontFamily};

/// Name of the built-in body font.
pub const BUILTIN_FONT_NAME: &str = "Helvetica";

/// Environment variable the command-line front end reads a font directory from.
pub const FONTS_DIR_ENV: &str = "BOOKING_PDF_FONTS_DIR";

/// Family name used when a font directory is given without an explicit family.
pub const DEFAULT_FAMILY_NAME: &str = "NotoSans";

const FONT_STYLES: &[&str] = &["Regular", "Bold", "Italic", "BoldItalic"];

/// Source of the body font used to set the confirmation text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FontProvider {
    /// The standard PDF Helvetica font; text is limited to the WinAnsi character set.
    #[default]
    Builtin,
    /// A TrueType family loaded from `<directory>/<family>-{Regular,Bold,Italic,BoldItalic}.ttf`.
    Directory {
        directory: PathBuf,
        family: String,
    },
}

impl FontProvider {
    /// Creates a provider that loads `family` from `directory`.
    pub fn directory(directory: impl Into<PathBuf>, family: impl Into<String>) -> Self {
        Self::Directory {
            directory: directory.into(),
            family: family.into(),
        }
    }

    /// Returns whether this provider uses the built-in font.
    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin)
    }

    /// Human readable font name for log messages.
    pub fn name(&self) -> &str {
        match self {
            Self::Builtin => BUILTIN_FONT_NAME,
            Self::Directory { family, .. } => family,
        }
    }
}

fn font_file_names(family: &str) -> Vec<String> {
    FONT_STYLES
        .iter()
        .map(|style| format!("{family}-{style}.ttf"))
        .collect()
}

fn missing_font_files(directory: &Path, family: &str) -> Vec<PathBuf> {
    font_file_names(family)
        .into_iter()
        .map(|name| directory.join(name))
        .filter(|candidate| !candidate.is_file())
        .collect()
}

fn ensure_family_present(directory: &Path, family: &str) -> Result<(), Error> {
    if !directory.is_dir() {
        return Err(Error::new(
            format!("Font directory missing at {}", directory.display()),
            io::Error::new(io::ErrorKind::NotFound, "font directory not found"),
        ));
    }

    let missing = missing_font_files(directory, family);
    if missing.is_empty() {
        return Ok(());
    }

    let missing_list = missing
        .iter()
        .map(|path| path.file_name().unwrap_or_default().to_string_lossy())
        .collect::<Vec<_>>()
        .join(", ");

    Err(Error::new(
        format!(
            "Font family '{}' is incomplete in {}: missing files [{}]",
            family,
            directory.display(),
            missing_list
        ),
        io::Error::new(io::ErrorKind::NotFound, "font files missing"),
    ))
}

/// Loads the TrueType family `family` from `directory`.
pub fn load_font_family(directory: &Path, family: &str) -> Result<FontFamily<FontData>, Error> {
    ensure_family_present(directory, family)?;

    fonts::from_files(directory, family, None).map_err(|err| {
        Error::new(
            format!(
                "Failed to load font family '{}' from {}: {}",
                family,
                directory.display(),
                err
            ),
            io::Error::new(io::ErrorKind::Other, err.to_string()),
        )
    })
}

/// Indicates whether all four style files of `family` are present in `directory`.
pub fn font_family_available(directory: &Path, family: &str) -> bool {
    ensure_family_present(directory, family).is_ok()
}
