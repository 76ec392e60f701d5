//! Listing errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the listing pipeline.
///
/// Owner/group lookup misses are not represented here: the metadata resolver
/// degrades to the numeric ID string locally instead of propagating.
#[derive(Error, Debug)]
pub enum ListError {
    /// The target path could not be opened as a directory (missing, not a
    /// directory, or permission denied). Aborts that directory only.
    #[error("cannot open directory '{path}': {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        source: io::Error,
    },

    /// A metadata query on a single entry failed. Aborts that entry only.
    #[error("cannot stat '{path}': {source}")]
    StatUnavailable {
        path: PathBuf,
        source: io::Error,
    },

    /// Failure writing to the output stream.
    #[error("error writing output: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ListError>;
