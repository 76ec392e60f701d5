//! Listing driver - runs the pipeline for one directory

use std::path::Path;

use termcolor::WriteColor;

use crate::classify::{DisplayCategory, classify};
use crate::entry::{read_visible_entries, sort_names};
use crate::error::Result;
use crate::layout::{LayoutPlan, render_across, render_down_across};
use crate::long_format::render_long_listing;
use crate::metadata;

/// How entries are arranged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Down-then-across column grid (default).
    #[default]
    Columns,
    /// Left-to-right flow (`-x`).
    Across,
    /// One detail line per entry (`-l`).
    Long,
}

/// Configuration for listing directories.
///
/// `term_width` is a snapshot taken by the caller once per invocation, so a
/// resize mid-listing never changes the geometry.
#[derive(Debug, Clone, Copy)]
pub struct ListingConfig {
    pub mode: DisplayMode,
    pub term_width: usize,
}

/// What one directory's listing produced.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListingReport {
    pub entries: usize,
    /// Entries skipped in long mode because their metadata query failed.
    pub entry_errors: usize,
}

/// Lists one directory at a time according to its configuration.
pub struct Lister {
    config: ListingConfig,
}

impl Lister {
    pub fn new(config: ListingConfig) -> Self {
        Self { config }
    }

    /// List a single directory to `out`.
    ///
    /// Returns `DirectoryUnreadable` when the directory itself cannot be
    /// read; per-entry stat failures in long mode are reported on stderr and
    /// counted in the report instead. An empty directory produces no output.
    pub fn list(&self, dir: &Path, out: &mut dyn WriteColor) -> Result<ListingReport> {
        let mut names = read_visible_entries(dir)?;
        sort_names(&mut names);
        if names.is_empty() {
            return Ok(ListingReport::default());
        }

        let mut report = ListingReport {
            entries: names.len(),
            entry_errors: 0,
        };

        match self.config.mode {
            DisplayMode::Long => {
                report.entry_errors = render_long_listing(dir, &names, out)?;
            }
            DisplayMode::Columns => {
                let plan = LayoutPlan::for_names(&names, self.config.term_width);
                let categories = entry_categories(dir, &names);
                render_down_across(&names, &categories, &plan, out)?;
            }
            DisplayMode::Across => {
                let plan = LayoutPlan::for_names(&names, self.config.term_width);
                let categories = entry_categories(dir, &names);
                render_across(&names, &categories, &plan, out)?;
            }
        }
        Ok(report)
    }
}

/// Classify each name under its parent directory. An entry that cannot be
/// stat'ed renders uncolored rather than failing the listing.
fn entry_categories(dir: &Path, names: &[String]) -> Vec<DisplayCategory> {
    names
        .iter()
        .map(|name| match metadata::resolve(&dir.join(name)) {
            Ok(meta) => classify(&meta, name),
            Err(_) => DisplayCategory::Plain,
        })
        .collect()
}
