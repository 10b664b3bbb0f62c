//! Per-scalar width classification.
//!
//! [`classify`] maps one Unicode scalar value to the number of terminal
//! columns it occupies when rendered monospaced. It is a total function:
//! every `u32` input produces a class, including surrogates, private-use,
//! unassigned, and out-of-range values. Layout code must never crash on
//! unexpected input; an approximate-but-present width beats an error.

use crate::tables;

/// Display width class of a single Unicode scalar.
///
/// The classifier's only output type. [`cells`](WidthClass::cells) converts
/// to a column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidthClass {
    /// Occupies no columns: controls, combining marks, format characters,
    /// variation selectors.
    Zero,
    /// Occupies one column: ASCII and most other scripts.
    Narrow,
    /// Occupies two columns: East Asian wide/fullwidth characters and the
    /// emoji blocks terminals render double-width.
    Wide,
}

impl WidthClass {
    /// Number of terminal columns for this class.
    #[inline]
    #[must_use]
    pub const fn cells(self) -> usize {
        match self {
            WidthClass::Zero => 0,
            WidthClass::Narrow => 1,
            WidthClass::Wide => 2,
        }
    }
}

/// Classify one scalar value into its display width class.
///
/// Rules are applied in order, first match wins:
///
/// 1. Control characters (below U+0020, and DEL) are zero-width.
/// 2. Printable ASCII is narrow.
/// 3. Combining marks are zero-width.
/// 4. Format, control, surrogate, private-use, and unassigned scalars are
///    zero-width.
/// 5. East Asian wide/fullwidth characters are wide.
/// 6. Variation selectors U+FE00..=U+FE0F are zero-width.
/// 7. Enumerated emoji/symbol blocks are wide.
/// 8. Everything else is narrow — including values above U+10FFFF, the
///    fallback for malformed input presented as a scalar.
///
/// Deterministic and never fails.
///
/// # Example
/// ```
/// use termfit_core::{WidthClass, classify};
///
/// assert_eq!(classify(u32::from('a')), WidthClass::Narrow);
/// assert_eq!(classify(u32::from('日')), WidthClass::Wide);
/// assert_eq!(classify(0x0301), WidthClass::Zero); // combining acute
/// ```
#[must_use]
pub fn classify(cp: u32) -> WidthClass {
    if cp < 0x20 || cp == 0x7F {
        return WidthClass::Zero;
    }
    if cp <= 0x7E {
        return WidthClass::Narrow;
    }
    if tables::lookup(tables::COMBINING, cp) {
        return WidthClass::Zero;
    }
    if tables::lookup(tables::ZERO_CATEGORY, cp) {
        return WidthClass::Zero;
    }
    if tables::lookup(tables::WIDE, cp) {
        return WidthClass::Wide;
    }
    if (0xFE00..=0xFE0F).contains(&cp) {
        return WidthClass::Zero;
    }
    if tables::lookup(tables::EMOJI_WIDE, cp) {
        return WidthClass::Wide;
    }
    WidthClass::Narrow
}

/// Column count for a single `char`.
///
/// Convenience wrapper over [`classify`] for callers iterating `chars()`.
#[inline]
#[must_use]
pub fn char_width(ch: char) -> usize {
    classify(u32::from(ch)).cells()
}
