//! Entry reader - enumerates a directory's visible children

use std::fs;
use std::path::Path;

use crate::error::{ListError, Result};

/// Read the names of a directory's direct children, excluding any name that
/// starts with `.`.
///
/// The raw read order is whatever the filesystem returns; callers impose
/// ordering with [`sort_names`]. Fails with `DirectoryUnreadable` when the
/// path cannot be opened as a directory.
pub fn read_visible_entries(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|source| ListError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        names.push(name);
    }
    Ok(names)
}

/// Sort names byte-wise ascending.
///
/// No locale collation or case folding; `Apple` sorts before `banana`. The
/// sort is stable, so duplicate keys keep their relative order.
pub fn sort_names(names: &mut [String]) {
    names.sort();
}
