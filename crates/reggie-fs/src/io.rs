//! Plain read operations on host files

use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Read text content from a file.
///
/// The handle is opened and closed within this call.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// List the regular files directly inside `dir`, sorted by file name.
///
/// Sub-directories are not descended into. Symlinks are followed, so a link
/// to a regular file is listed.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        } else {
            tracing::trace!("Skipping non-file entry {}", path.display());
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
