//! Plaintext checks over files on disk

use std::fs::File;
use std::path::Path;

use crate::config::PreviewLimit;
use crate::detect::Detection;
use crate::error::Result;
use crate::reader;

/// Check whether the whole file at `path` is plaintext
pub fn from_file(path: impl AsRef<Path>) -> Result<bool> {
    let file = open(path.as_ref())?;
    reader::from_reader(file)
}

/// Check whether the first `max_kb` kilobytes of the file at `path` are
/// plaintext
///
/// The file is opened before `max_kb` is validated, so an unreadable path
/// reports its I/O error even when `max_kb` is zero.
pub fn from_file_preview(path: impl AsRef<Path>, max_kb: usize) -> Result<bool> {
    let file = open(path.as_ref())?;
    reader::from_reader_preview(file, max_kb)
}

pub(crate) fn detect_file(path: &Path, preview: Option<PreviewLimit>) -> Result<Detection> {
    let file = open(path)?;
    reader::detect_reader(file, preview)
}

fn open(path: &Path) -> Result<File> {
    log::debug!("opening {}", path.display());
    Ok(File::open(path)?)
}
