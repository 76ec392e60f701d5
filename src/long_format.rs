//! Long-format renderer - one detail line per entry

use std::io::{self, Write};
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use termcolor::WriteColor;

use crate::classify::classify;
use crate::metadata::{self, EntryMetadata, FileKind};
use crate::paint::write_colored_name;

/// Render one line per sorted entry:
/// type+permissions, link count, owner, group, size, mtime, colorized name.
///
/// An entry whose metadata cannot be resolved gets a notice on stderr and is
/// skipped; the remaining entries still render. Returns the number of such
/// failures so the caller can reflect them in the exit status. The name's
/// color comes from the entry's own metadata under its real parent directory.
pub fn render_long_listing(
    dir: &Path,
    names: &[String],
    out: &mut dyn WriteColor,
) -> io::Result<usize> {
    let mut failures = 0;
    for name in names {
        let path = dir.join(name);
        let meta = match metadata::resolve(&path) {
            Ok(meta) => meta,
            Err(e) => {
                eprintln!("oxls: {}", e);
                failures += 1;
                continue;
            }
        };
        write!(
            out,
            "{} {:>2} {:<8} {:<8} {:>8} {} ",
            permission_string(&meta),
            meta.nlink,
            meta.owner,
            meta.group,
            meta.size,
            format_mtime(meta.modified),
        )?;
        write_colored_name(out, name, classify(&meta, name))?;
        writeln!(out)?;
    }
    Ok(failures)
}

/// Ten-character type and permission field, e.g. `drwxr-xr-x`.
pub fn permission_string(meta: &EntryMetadata) -> String {
    let glyph = match meta.kind {
        FileKind::Directory => 'd',
        FileKind::Symlink => 'l',
        FileKind::CharDevice => 'c',
        FileKind::BlockDevice => 'b',
        FileKind::Socket => 's',
        FileKind::Fifo => 'p',
        FileKind::Regular | FileKind::Unknown => '-',
    };

    let mut perms = String::with_capacity(10);
    perms.push(glyph);
    for shift in [6u32, 3, 0] {
        let triad = (meta.mode >> shift) & 0o7;
        perms.push(if triad & 0o4 != 0 { 'r' } else { '-' });
        perms.push(if triad & 0o2 != 0 { 'w' } else { '-' });
        perms.push(if triad & 0o1 != 0 { 'x' } else { '-' });
    }
    perms
}

/// Modification time as `Mon DD HH:MM` in local time.
fn format_mtime(modified: SystemTime) -> String {
    DateTime::<Local>::from(modified).format("%b %d %H:%M").to_string()
}
