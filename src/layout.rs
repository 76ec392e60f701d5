//! Layout engine - column grid and horizontal flow
//!
//! Both layouts share one width computation: the widest visible name plus a
//! fixed two-space gutter. The terminal width is a snapshot taken once per
//! invocation, never re-queried mid-listing.

use std::io::{self, Write};

use termcolor::WriteColor;

use crate::classify::DisplayCategory;
use crate::paint::write_padded_name;

/// Gutter between columns, in spaces.
const COLUMN_SPACING: usize = 2;

/// Width reported when the output device cannot be queried.
const FALLBACK_WIDTH: usize = 80;

/// Columns of the output terminal, or 80 when stdout is not a terminal or
/// reports zero width. Never fails.
pub fn terminal_width() -> usize {
    match term_size::dimensions() {
        Some((w, _)) if w > 0 => w,
        _ => FALLBACK_WIDTH,
    }
}

/// Column geometry derived from one directory's name set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPlan {
    pub term_width: usize,
    pub column_width: usize,
    pub column_count: usize,
    /// Rows in the down-then-across grid; meaningful for the vertical layout.
    pub row_count: usize,
}

impl LayoutPlan {
    /// Compute the plan for a name set and a terminal width snapshot.
    ///
    /// `column_width` is clamped to at least 1 so the column division can
    /// never divide by zero, even for empty names.
    pub fn for_names(names: &[String], term_width: usize) -> Self {
        let max_len = names.iter().map(|n| n.chars().count()).max().unwrap_or(0);
        let column_width = (max_len + COLUMN_SPACING).max(1);
        let column_count = (term_width / column_width).max(1);
        let row_count = names.len().div_ceil(column_count);
        Self {
            term_width,
            column_width,
            column_count,
            row_count,
        }
    }
}

/// Render the down-then-across grid: entry (row r, col c) is sequence index
/// `c * row_count + r`, so reading columns top to bottom reproduces the
/// sorted order. Cells past the last entry are omitted, not padded.
///
/// `categories` runs parallel to `names`. An empty name set emits nothing.
pub fn render_down_across(
    names: &[String],
    categories: &[DisplayCategory],
    plan: &LayoutPlan,
    out: &mut dyn WriteColor,
) -> io::Result<()> {
    for row in 0..plan.row_count {
        for col in 0..plan.column_count {
            let idx = col * plan.row_count + row;
            if idx >= names.len() {
                continue;
            }
            write_padded_name(out, &names[idx], categories[idx], plan.column_width)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Render the left-to-right flow: entries are emitted in order, wrapping to a
/// new line before an entry only when the line already holds at least one
/// entry and the next cell would overflow the terminal width.
pub fn render_across(
    names: &[String],
    categories: &[DisplayCategory],
    plan: &LayoutPlan,
    out: &mut dyn WriteColor,
) -> io::Result<()> {
    if names.is_empty() {
        return Ok(());
    }
    let mut current = 0;
    for (name, &category) in names.iter().zip(categories) {
        if current > 0 && current + plan.column_width > plan.term_width {
            writeln!(out)?;
            current = 0;
        }
        write_padded_name(out, name, category, plan.column_width)?;
        current += plan.column_width;
    }
    writeln!(out)
}
