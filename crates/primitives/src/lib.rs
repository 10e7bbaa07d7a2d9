//! Core types for text editing: char-indexed spans, rope helpers, and transactions.

/// Text span types and char-index aliases.
pub mod range;
/// Rope utilities and extensions.
pub mod rope;
/// Atomic edit steps and position mapping.
pub mod transaction;

pub use range::{CharIdx, CharLen, InvertedSpan, Span};
pub use rope::{max_cursor_pos, span_text};
pub use ropey::{Rope, RopeSlice};
pub use transaction::{Bias, Change, ChangeSet, EditSpan, Transaction};
