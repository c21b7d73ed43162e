//! Error type returned by the confirmation renderer.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while producing a booking confirmation.
#[derive(Debug)]
pub enum RenderError {
    /// The output path was empty.
    EmptyPath,
    /// The parent directory of the output path could not be created.
    CreateDirectory {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying filesystem error.
        source: io::Error,
    },
    /// A line contains a character the built-in font cannot encode.
    UnsupportedText {
        /// The line as it would have been printed.
        line: String,
        /// First character without a WinAnsi code.
        character: char,
    },
    /// The configured font family could not be loaded.
    Font(genpdf::error::Error),
    /// genpdf failed to lay out or serialize the page.
    Layout(genpdf::error::Error),
    /// printpdf failed to build or serialize the document.
    Pdf(String),
    /// The rendered document could not be written to the output path.
    Write {
        /// Destination of the document.
        path: PathBuf,
        /// Underlying filesystem error.
        source: io::Error,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPath => write!(f, "Output path must not be empty"),
            Self::CreateDirectory { path, .. } => {
                write!(f, "Failed to create output directory {}", path.display())
            }
            Self::UnsupportedText { line, character } => write!(
                f,
                "'{line}' contains {character:?}, which the built-in font cannot show; use a font directory to render it"
            ),
            Self::Font(err) => write!(f, "Failed to load font family: {err}"),
            Self::Layout(err) => write!(f, "Failed to lay out confirmation page: {err}"),
            Self::Pdf(message) => write!(f, "Failed to build PDF document: {message}"),
            Self::Write { path, .. } => {
                write!(f, "Failed to write PDF document to {}", path.display())
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CreateDirectory { source, .. } | Self::Write { source, .. } => Some(source),
            Self::Font(err) | Self::Layout(err) => Some(err),
            Self::EmptyPath | Self::UnsupportedText { .. } | Self::Pdf(_) => None,
        }
    }
}
