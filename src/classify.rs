//! Classifier - maps entry metadata and name to a display category
//!
//! Pure functions only; no I/O happens here. Rendering a category to color
//! markup lives in `paint` so width arithmetic never sees escape bytes.

use crate::metadata::{EntryMetadata, FileKind};

/// Suffixes treated as archives, matched only as true trailing suffixes.
pub const ARCHIVE_SUFFIXES: [&str; 6] = [".tar", ".gz", ".zip", ".tgz", ".bz2", ".xz"];

/// Display category for colorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayCategory {
    Directory,
    Executable,
    Archive,
    Symlink,
    Special,
    Plain,
}

/// Classify an entry for display.
///
/// Precedence: Symlink > Directory > Special > Executable > Archive > Plain.
/// Symlink wins outright because links are never dereferenced here, and the
/// execute-bit check precedes the suffix check so an executable with an
/// archive-looking name renders as executable.
pub fn classify(meta: &EntryMetadata, name: &str) -> DisplayCategory {
    match meta.kind {
        FileKind::Symlink => DisplayCategory::Symlink,
        FileKind::Directory => DisplayCategory::Directory,
        FileKind::CharDevice | FileKind::BlockDevice | FileKind::Socket | FileKind::Fifo => {
            DisplayCategory::Special
        }
        FileKind::Regular | FileKind::Unknown => {
            if meta.is_executable() {
                DisplayCategory::Executable
            } else if is_archive_name(name) {
                DisplayCategory::Archive
            } else {
                DisplayCategory::Plain
            }
        }
    }
}

/// Whether the name ends with one of the known archive suffixes.
fn is_archive_name(name: &str) -> bool {
    ARCHIVE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use super::*;

    fn meta(kind: FileKind, mode: u32) -> EntryMetadata {
        EntryMetadata {
            kind,
            mode,
            nlink: 1,
            owner: "alice".to_string(),
            group: "staff".to_string(),
            size: 0,
            modified: SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_symlink_beats_everything() {
        // A symlink to an executable still classifies as a symlink; the
        // target's type is irrelevant because links are never followed.
        let m = meta(FileKind::Symlink, 0o777);
        assert_eq!(classify(&m, "link.tar"), DisplayCategory::Symlink);
    }

    #[test]
    fn test_directory() {
        let m = meta(FileKind::Directory, 0o755);
        assert_eq!(classify(&m, "src"), DisplayCategory::Directory);
    }

    #[test]
    fn test_special_kinds() {
        for kind in [
            FileKind::CharDevice,
            FileKind::BlockDevice,
            FileKind::Socket,
            FileKind::Fifo,
        ] {
            let m = meta(kind, 0o644);
            assert_eq!(classify(&m, "dev"), DisplayCategory::Special);
        }
    }

    #[test]
    fn test_executable_beats_archive_suffix() {
        let m = meta(FileKind::Regular, 0o755);
        assert_eq!(classify(&m, "self-extract.tar"), DisplayCategory::Executable);
    }

    #[test]
    fn test_any_execute_bit_counts() {
        // Group-only and other-only execute bits still mean executable.
        assert_eq!(
            classify(&meta(FileKind::Regular, 0o610), "f"),
            DisplayCategory::Executable
        );
        assert_eq!(
            classify(&meta(FileKind::Regular, 0o601), "f"),
            DisplayCategory::Executable
        );
    }

    #[test]
    fn test_archive_suffixes() {
        let m = meta(FileKind::Regular, 0o644);
        for name in [
            "a.tar", "b.gz", "c.zip", "d.tgz", "e.bz2", "f.xz", "nested.tar.gz",
        ] {
            assert_eq!(classify(&m, name), DisplayCategory::Archive, "{name}");
        }
    }

    #[test]
    fn test_suffix_must_be_trailing() {
        let m = meta(FileKind::Regular, 0o644);
        // Contains ".tar" but does not end with it.
        assert_eq!(classify(&m, "notes.tar.txt"), DisplayCategory::Plain);
        assert_eq!(classify(&m, "gz"), DisplayCategory::Plain);
    }

    #[test]
    fn test_plain() {
        let m = meta(FileKind::Regular, 0o644);
        assert_eq!(classify(&m, "README"), DisplayCategory::Plain);
    }
}
