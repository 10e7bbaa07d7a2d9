//! Rope utilities and extensions.

use ropey::RopeSlice;

use crate::range::{CharIdx, Span};

/// Returns the maximum valid cursor position, which is always the character count.
///
/// This allows a position to sit at the very end of the document.
#[inline]
pub fn max_cursor_pos(text: RopeSlice) -> CharIdx {
	text.len_chars()
}

/// Returns the text covered by `span`, clamped to the document.
pub fn span_text(text: RopeSlice, span: Span) -> String {
	let span = span.clamp(max_cursor_pos(text));
	text.slice(span.as_range()).to_string()
}
