#![forbid(unsafe_code)]

//! Text fitting for fixed-width terminal cells.
//!
//! # Role in termfit
//! `termfit-text` is the layout layer on top of `termfit-core`'s width
//! measurement. It shortens, wraps, pads, and sizes text so that rendered
//! output lands inside a known column budget.
//!
//! # Primary responsibilities
//! - **[`fit_cell`]**: fit one string into a cell, by ellipsis truncation or
//!   word wrap ([`FitMode`]).
//! - **[`natural_widths`] / [`distribute`]**: size a row of columns from
//!   their contents and spread or shrink the available horizontal space.
//! - **[`pad_to_width`]**: space-pad measured text for aligned cells.
//!
//! Everything is a pure function over its arguments; nothing persists
//! between calls and no call touches shared state.
//!
//! # Example
//! ```
//! use termfit_text::{FitMode, fit_cell};
//!
//! assert_eq!(fit_cell("abcdefgh", 5, FitMode::Ellipsis), "abcd…");
//! assert_eq!(fit_cell("a bb ccc", 5, FitMode::Wrap), "a bb\nccc");
//! ```

pub mod columns;
pub mod fit;
pub mod pad;

pub use columns::{DEFAULT_MIN_COLUMN_WIDTH, distribute, natural_widths};
pub use fit::{FitMode, UnknownModeError, fit_cell, truncate_ellipsis, wrap_words};
pub use pad::{Alignment, pad_to_width};
