//! Fitting a string into a fixed display-width budget.
//!
//! Two modes: cut the text and append an ellipsis marker, or wrap it onto
//! multiple lines at word boundaries. The mode is a closed enum decided once
//! at the call boundary; [`FitMode::from_str`](std::str::FromStr) is the only
//! place a mode string is interpreted, and the only place
//! [`UnknownModeError`] can arise.

use std::str::FromStr;

use termfit_core::{char_width, display_width};

/// The truncation marker appended by [`truncate_ellipsis`].
pub const ELLIPSIS: char = '…';

/// Display width of [`ELLIPSIS`] (one cell under the default rule).
pub const ELLIPSIS_WIDTH: usize = 1;

/// How [`fit_cell`] shortens text that exceeds its budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Cut the text and append `…`, keeping one line.
    #[default]
    Ellipsis,
    /// Break the text into lines at word boundaries.
    Wrap,
}

/// A fitting mode string outside `{"ellipsis", "wrap"}`.
///
/// Never recovered internally; the caller (typically the CLI) reports it and
/// exits non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownModeError {
    mode: String,
}

impl UnknownModeError {
    /// The rejected mode string.
    #[must_use]
    pub fn mode(&self) -> &str {
        &self.mode
    }
}

impl std::fmt::Display for UnknownModeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown truncation mode: {}", self.mode)
    }
}

impl std::error::Error for UnknownModeError {}

impl FromStr for FitMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ellipsis" => Ok(FitMode::Ellipsis),
            "wrap" => Ok(FitMode::Wrap),
            other => Err(UnknownModeError {
                mode: other.to_string(),
            }),
        }
    }
}

/// Fit text into a cell of the given display width.
///
/// Empty input or a zero budget yields the empty string in both modes.
#[must_use]
pub fn fit_cell(text: &str, max_width: usize, mode: FitMode) -> String {
    if text.is_empty() || max_width == 0 {
        return String::new();
    }
    match mode {
        FitMode::Ellipsis => truncate_ellipsis(text, max_width),
        FitMode::Wrap => wrap_words(text, max_width),
    }
}

/// Truncate text to `max_width` cells, appending `…` if anything was cut.
///
/// Text that already fits is returned unchanged. Otherwise one cell is
/// reserved for the marker and scalars are taken left to right until the
/// next one would overflow; the cut lands immediately before that scalar, so
/// a trailing zero-width mark stays attached to the character it modifies.
///
/// When `max_width` leaves no room beside the marker, the marker alone is
/// returned — for `max_width == 0` its width exceeds the budget, which is
/// accepted rather than corrected.
///
/// # Example
/// ```
/// use termfit_text::truncate_ellipsis;
///
/// assert_eq!(truncate_ellipsis("abcdefgh", 5), "abcd…");
/// assert_eq!(truncate_ellipsis("short", 10), "short");
/// assert_eq!(truncate_ellipsis("日本語", 3), "日…");
/// ```
#[must_use]
pub fn truncate_ellipsis(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }

    let available = max_width.saturating_sub(ELLIPSIS_WIDTH);
    if available == 0 {
        return ELLIPSIS.to_string();
    }

    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let width = char_width(ch);
        if used + width > available {
            let mut out = String::with_capacity(idx + ELLIPSIS.len_utf8());
            out.push_str(&text[..idx]);
            out.push(ELLIPSIS);
            return out;
        }
        used += width;
    }

    // Unreachable while the fast path above holds, but classification is
    // total and so is this function.
    let mut out = text.to_string();
    out.push(ELLIPSIS);
    out
}

/// Wrap text into lines of at most `max_width` cells at word boundaries.
///
/// Words are maximal runs of non-whitespace; whitespace runs collapse to a
/// single separating space and leading/trailing whitespace disappears. Words
/// pack greedily: a word joins the current line when the line width plus one
/// space plus the word still fits, otherwise it starts a new line. A single
/// word wider than the budget sits alone on its own line, unsplit, and is
/// allowed to overflow.
///
/// Lines are joined with `\n`. Empty input or a zero budget yields the empty
/// string.
///
/// # Example
/// ```
/// use termfit_text::wrap_words;
///
/// assert_eq!(wrap_words("a bb ccc dddd", 5), "a bb\nccc\ndddd");
/// ```
#[must_use]
pub fn wrap_words(text: &str, max_width: usize) -> String {
    if text.is_empty() || max_width == 0 {
        return String::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let word_width = display_width(word);
        let join_cost = if line.is_empty() { 0 } else { 1 };

        if line_width + join_cost + word_width <= max_width {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
            line_width += join_cost + word_width;
        } else {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            line.push_str(word);
            line_width = word_width;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines.join("\n")
}
