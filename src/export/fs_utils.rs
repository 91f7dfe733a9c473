// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::ui::prompt::ask_confirmation;
use std::io;
use crate::utils::path::expand_tilde;
use std::path::{Path, PathBuf};

/// Check that `path` may be written.
///
/// A missing file or `force` passes straight through; an existing file is
/// only overwritten after the user confirms.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    if ask_confirmation("Overwrite?") {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::from(io::Error::other(
            "Export cancelled: existing file not overwritten",
        )))
    }
}

/// Exports only accept absolute output paths (`~/` is expanded).
pub(crate) fn require_absolute(file: &str) -> AppResult<PathBuf> {
    let path = expand_tilde(file);
    if path.is_absolute() {
        Ok(path)
    } else {
        Err(AppError::Export(format!(
            "Output file path must be absolute: {file}"
        )))
    }
}
