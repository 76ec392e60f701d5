//! Metadata resolver - per-entry filesystem attributes, symlinks not followed

use std::fs;
use std::os::unix::fs::{FileTypeExt, MetadataExt};
use std::path::Path;
use std::time::SystemTime;

use uzers::{get_group_by_gid, get_user_by_uid};

use crate::error::{ListError, Result};

/// The entry's own file type, never a followed symlink target's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Regular,
    Directory,
    Symlink,
    CharDevice,
    BlockDevice,
    Socket,
    Fifo,
    Unknown,
}

/// Attributes of a single directory entry.
#[derive(Debug, Clone)]
pub struct EntryMetadata {
    pub kind: FileKind,
    /// Raw mode bits; the rwx triads live in the low 9 bits.
    pub mode: u32,
    pub nlink: u64,
    pub owner: String,
    pub group: String,
    pub size: u64,
    pub modified: SystemTime,
}

impl EntryMetadata {
    /// Whether any of the owner/group/other execute bits are set.
    pub fn is_executable(&self) -> bool {
        self.mode & 0o111 != 0
    }
}

/// Resolve an entry's metadata without following symlinks.
///
/// A broken symlink still resolves, since only the link's own attributes are
/// queried. Fails with `StatUnavailable` when the entry itself cannot be
/// queried, e.g. it vanished between enumeration and stat.
pub fn resolve(path: &Path) -> Result<EntryMetadata> {
    let md = fs::symlink_metadata(path).map_err(|source| ListError::StatUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let ft = md.file_type();
    let kind = if ft.is_symlink() {
        FileKind::Symlink
    } else if ft.is_dir() {
        FileKind::Directory
    } else if ft.is_char_device() {
        FileKind::CharDevice
    } else if ft.is_block_device() {
        FileKind::BlockDevice
    } else if ft.is_socket() {
        FileKind::Socket
    } else if ft.is_fifo() {
        FileKind::Fifo
    } else if ft.is_file() {
        FileKind::Regular
    } else {
        FileKind::Unknown
    };

    Ok(EntryMetadata {
        kind,
        mode: md.mode(),
        nlink: md.nlink(),
        owner: owner_name(md.uid()),
        group: group_name(md.gid()),
        size: md.size(),
        modified: md.modified().unwrap_or(SystemTime::UNIX_EPOCH),
    })
}

/// Resolve a uid to a username, falling back to the numeric ID.
fn owner_name(uid: u32) -> String {
    get_user_by_uid(uid)
        .map(|u| u.name().to_string_lossy().into_owned())
        .unwrap_or_else(|| uid.to_string())
}

/// Resolve a gid to a group name, falling back to the numeric ID.
fn group_name(gid: u32) -> String {
    get_group_by_gid(gid)
        .map(|g| g.name().to_string_lossy().into_owned())
        .unwrap_or_else(|| gid.to_string())
}
