//! Space padding for aligned cells.
//!
//! The box-drawing layer pads fitted text out to its cell width; the
//! alignment is an explicit value on every call, not ambient configuration.

use termfit_core::display_width;

/// Horizontal placement of text inside a padded cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Text at the left edge, spaces after.
    #[default]
    Left,
    /// Text centered; an odd leftover column goes to the right side.
    Center,
    /// Text at the right edge, spaces before.
    Right,
}

/// Pad text with spaces to the given display width.
///
/// Text already at or past the width is returned unchanged — padding never
/// truncates. Compose with [`fit_cell`](crate::fit_cell) first when the text
/// may overflow the cell.
///
/// # Example
/// ```
/// use termfit_text::{Alignment, pad_to_width};
///
/// assert_eq!(pad_to_width("ab", 5, Alignment::Left), "ab   ");
/// assert_eq!(pad_to_width("ab", 5, Alignment::Right), "   ab");
/// assert_eq!(pad_to_width("ab", 5, Alignment::Center), " ab  ");
/// assert_eq!(pad_to_width("日本", 6, Alignment::Left), "日本  ");
/// ```
#[must_use]
pub fn pad_to_width(text: &str, width: usize, alignment: Alignment) -> String {
    let current = display_width(text);
    if current >= width {
        return text.to_string();
    }

    let padding = width - current;
    let (before, after) = match alignment {
        Alignment::Left => (0, padding),
        Alignment::Right => (padding, 0),
        Alignment::Center => {
            let before = padding / 2;
            (before, padding - before)
        }
    };

    let mut out = String::with_capacity(text.len() + padding);
    out.extend(std::iter::repeat_n(' ', before));
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', after));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use termfit_core::DisplayWidth;

    #[test]
    fn left_pads_after() {
        assert_eq!(pad_to_width("ab", 5, Alignment::Left), "ab   ");
    }

    #[test]
    fn right_pads_before() {
        assert_eq!(pad_to_width("ab", 5, Alignment::Right), "   ab");
    }

    #[test]
    fn center_gives_odd_column_to_the_right() {
        assert_eq!(pad_to_width("ab", 5, Alignment::Center), " ab  ");
        assert_eq!(pad_to_width("ab", 6, Alignment::Center), "  ab  ");
    }

    #[test]
    fn padding_measures_in_cells() {
        // Two wide characters occupy four cells, leaving two of padding.
        let padded = pad_to_width("日本", 6, Alignment::Left);
        assert_eq!(padded, "日本  ");
        assert_eq!(padded.display_width(), 6);
    }

    #[test]
    fn full_or_overflowing_text_is_unchanged() {
        assert_eq!(pad_to_width("abcde", 5, Alignment::Left), "abcde");
        assert_eq!(pad_to_width("abcdef", 5, Alignment::Center), "abcdef");
    }

    #[test]
    fn zero_width_cell_is_unchanged() {
        assert_eq!(pad_to_width("", 0, Alignment::Left), "");
    }
}
