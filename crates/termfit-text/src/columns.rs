//! Column width allocation for multi-column layouts.
//!
//! Two pure steps: measure the natural width of each column from its text,
//! then stretch or shrink the set to a total budget. Lower-indexed columns
//! win ties when surplus space does not divide evenly.

use termfit_core::display_width;

/// Width floor applied by [`natural_widths`] when no other minimum is given.
pub const DEFAULT_MIN_COLUMN_WIDTH: usize = 5;

/// Hard floor for the shrink path of [`distribute`], independent of any
/// caller-supplied minimum.
const SHRINK_FLOOR_WIDTH: usize = 5;

/// Natural width of each column: the display width of its text, floored at
/// `min_width`. Order-preserving, one result per input.
///
/// # Example
/// ```
/// use termfit_text::natural_widths;
///
/// assert_eq!(natural_widths(&["hi", "hello", "a"], 5), vec![5, 5, 5]);
/// assert_eq!(natural_widths(&["wide column here"], 5), vec![16]);
/// ```
#[must_use]
pub fn natural_widths<S: AsRef<str>>(texts: &[S], min_width: usize) -> Vec<usize> {
    texts
        .iter()
        .map(|text| display_width(text.as_ref()).max(min_width))
        .collect()
}

/// Stretch or shrink column widths to a total budget.
///
/// When the widths already fit, the surplus is handed out one cell at a time
/// round-robin in index order, so lower-indexed columns receive priority on
/// uneven splits. When they do not fit, each column shrinks proportionally
/// (`width * total_available / total_min`, floored) but never below
/// `SHRINK_FLOOR_WIDTH`.
///
/// The floor means the shrunk sum can still exceed `total_available` once
/// enough columns are pinned. That overflow is preserved rather than
/// renormalized — callers asked for readable columns, not a strict sum — and
/// flagged with a warning event.
///
/// # Example
/// ```
/// use termfit_text::distribute;
///
/// assert_eq!(distribute(&[5, 5, 5], 18), vec![6, 6, 6]);
/// assert_eq!(distribute(&[10, 10, 10], 15), vec![5, 5, 5]);
/// ```
#[must_use]
pub fn distribute(widths: &[usize], total_available: usize) -> Vec<usize> {
    if widths.is_empty() {
        return Vec::new();
    }

    let total_min: usize = widths.iter().sum();

    if total_min <= total_available {
        let extra = total_available - total_min;
        let mut adjusted = widths.to_vec();
        for i in 0..extra {
            adjusted[i % widths.len()] += 1;
        }
        adjusted
    } else {
        // Integer scaling keeps the result identical on every platform.
        let adjusted: Vec<usize> = widths
            .iter()
            .map(|&width| {
                let scaled = (width as u64 * total_available as u64 / total_min as u64) as usize;
                scaled.max(SHRINK_FLOOR_WIDTH)
            })
            .collect();

        let adjusted_total: usize = adjusted.iter().sum();
        if adjusted_total > total_available {
            tracing::warn!(
                total_available,
                adjusted_total,
                columns = widths.len(),
                "shrunk column widths exceed the available budget; floor-pinned"
            );
        }

        adjusted
    }
}
