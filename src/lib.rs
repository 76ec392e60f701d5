//! oxls - a small ls: column grid, horizontal flow, long format, colors

pub mod classify;
pub mod entry;
pub mod error;
pub mod layout;
pub mod listing;
pub mod long_format;
pub mod metadata;
pub mod paint;

pub use classify::{DisplayCategory, classify};
pub use entry::{read_visible_entries, sort_names};
pub use error::{ListError, Result};
pub use layout::{LayoutPlan, terminal_width};
pub use listing::{DisplayMode, Lister, ListingConfig, ListingReport};
pub use metadata::{EntryMetadata, FileKind};
