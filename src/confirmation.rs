//! Entry points used by the booking workflow.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::builder::ConfirmationBuilder;
use crate::error::RenderError;
use crate::record::BookingRecord;

/// Creates the parent directory of `path`, including missing ancestors.
///
/// Succeeds without doing anything when the directory already exists or when `path` has no parent
/// component.
pub fn ensure_parent_directory(path: &Path) -> Result<(), RenderError> {
    let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) else {
        return Ok(());
    };
    if parent.is_dir() {
        return Ok(());
    }

    debug!("Creating output directory {}", parent.display());
    fs::create_dir_all(parent).map_err(|source| RenderError::CreateDirectory {
        path: parent.to_path_buf(),
        source,
    })
}

/// Renders `record` as a confirmation PDF at `output_path` with the default settings and returns
/// the path that was written.
///
/// See [`ConfirmationBuilder`] to change the brand, currency or font.
pub fn render_booking_confirmation(
    record: &BookingRecord,
    output_path: impl AsRef<Path>,
) -> Result<PathBuf, RenderError> {
    ConfirmationBuilder::new().write(record, output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_directory_is_left_alone() {
        let directory = tempfile::tempdir().expect("create temp dir");
        let path = directory.path().join("confirm.pdf");

        ensure_parent_directory(&path).expect("existing parent");
        ensure_parent_directory(&path).expect("idempotent");
        assert!(directory.path().is_dir());
    }

    #[test]
    fn creates_nested_directories() {
        let directory = tempfile::tempdir().expect("create temp dir");
        let path = directory.path().join("a/b/c/confirm.pdf");

        ensure_parent_directory(&path).expect("create parents");
        assert!(directory.path().join("a/b/c").is_dir());
    }

    #[test]
    fn bare_file_name_needs_no_directory() {
        ensure_parent_directory(Path::new("confirm.pdf")).expect("no parent component");
    }

    #[test]
    fn parent_blocked_by_a_file_is_an_error() {
        let directory = tempfile::tempdir().expect("create temp dir");
        let blocker = directory.path().join("blocker");
        fs::write(&blocker, b"not a directory").expect("write blocker");

        let err = ensure_parent_directory(&blocker.join("confirm.pdf")).expect_err("blocked");
        assert!(matches!(err, RenderError::CreateDirectory { .. }), "{err}");
    }
}
