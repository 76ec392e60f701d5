//! Category-to-color rendering
//!
//! Kept separate from classification so layout arithmetic stays blind to
//! markup bytes: padding is always computed from the visible name length.

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::classify::DisplayCategory;

/// The color used for a category, if any.
///
/// Directory blue, executable green, archive red, symlink magenta. Special
/// files render black-on-white; termcolor models foreground/background but
/// not reverse video, so this stands in for it.
pub fn color_spec(category: DisplayCategory) -> Option<ColorSpec> {
    let mut spec = ColorSpec::new();
    match category {
        DisplayCategory::Directory => spec.set_fg(Some(Color::Blue)),
        DisplayCategory::Executable => spec.set_fg(Some(Color::Green)),
        DisplayCategory::Archive => spec.set_fg(Some(Color::Red)),
        DisplayCategory::Symlink => spec.set_fg(Some(Color::Magenta)),
        DisplayCategory::Special => spec.set_fg(Some(Color::Black)).set_bg(Some(Color::White)),
        DisplayCategory::Plain => return None,
    };
    Some(spec)
}

/// Write a name with its category color, no padding.
pub fn write_colored_name(
    out: &mut dyn WriteColor,
    name: &str,
    category: DisplayCategory,
) -> io::Result<()> {
    match color_spec(category) {
        Some(spec) => {
            out.set_color(&spec)?;
            write!(out, "{}", name)?;
            out.reset()
        }
        None => write!(out, "{}", name),
    }
}

/// Write a name colored and left-aligned to `width` visible columns.
///
/// At least one trailing space is emitted even when the name fills the cell,
/// so adjacent columns never touch.
pub fn write_padded_name(
    out: &mut dyn WriteColor,
    name: &str,
    category: DisplayCategory,
    width: usize,
) -> io::Result<()> {
    write_colored_name(out, name, category)?;
    let pad = width.saturating_sub(name.chars().count()).max(1);
    write!(out, "{:pad$}", "")
}

#[cfg(test)]
mod tests {
    use termcolor::NoColor;

    use super::*;

    fn render_padded(name: &str, category: DisplayCategory, width: usize) -> String {
        let mut out = NoColor::new(Vec::new());
        write_padded_name(&mut out, name, category, width).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(render_padded("ab", DisplayCategory::Plain, 5), "ab   ");
    }

    #[test]
    fn test_minimum_one_trailing_space() {
        assert_eq!(render_padded("abcde", DisplayCategory::Plain, 5), "abcde ");
        assert_eq!(render_padded("toolong", DisplayCategory::Plain, 3), "toolong ");
    }

    #[test]
    fn test_padding_ignores_markup() {
        // With colors disabled the visible width is all there is; padding is
        // computed from the name, never from escape bytes.
        let plain = render_padded("dir", DisplayCategory::Plain, 6);
        let colored = render_padded("dir", DisplayCategory::Directory, 6);
        assert_eq!(plain.len(), colored.len());
    }

    #[test]
    fn test_plain_has_no_spec() {
        assert!(color_spec(DisplayCategory::Plain).is_none());
        assert!(color_spec(DisplayCategory::Directory).is_some());
    }
}
