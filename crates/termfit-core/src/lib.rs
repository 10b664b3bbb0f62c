#![forbid(unsafe_code)]

//! Core: terminal cell width classification and string measurement.
//!
//! # Role in termfit
//! `termfit-core` is the measurement layer. It owns the Unicode range tables
//! and the per-scalar width classifier that everything above it (fitting,
//! wrapping, column allocation) builds on.
//!
//! # Primary responsibilities
//! - **[`WidthClass`]**: the 0/1/2-cell classification of a single scalar.
//! - **[`classify`]**: total, deterministic scalar-to-class mapping.
//! - **[`display_width`]**: scalar-sum width of a string in terminal cells.
//!
//! # How it fits in the system
//! The fitting layer (`termfit-text`) consumes these widths to truncate,
//! wrap, and allocate columns. Nothing here performs I/O or holds state;
//! every function is pure and may be called concurrently without locking.
//!
//! Widths are computed per Unicode scalar value, never per grapheme cluster:
//! a base character followed by combining marks scores as base width plus
//! zero for each mark. This keeps measurement additive and cheap, which is
//! what fixed-cell layout code wants.

pub mod classify;
pub mod measure;

mod tables;

pub use classify::{WidthClass, char_width, classify};
pub use measure::{DisplayWidth, ascii_width, display_width};
