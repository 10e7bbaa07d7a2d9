//! Position mapping for suggestion spans.
//!
//! `from` sticks left and `to` sticks right, so typing directly against either
//! boundary widens a span instead of eating it.

use redline_primitives::{Bias, ChangeSet, Span};

use super::types::{Suggestion, SuggestionStatus};

/// Result of mapping a span through a changeset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappedSpan {
	pub span: Span,
	/// True when a non-empty span was reduced to nothing.
	pub collapsed: bool,
}

/// Maps both ends of `span` through `changes`.
pub fn map_span(span: Span, changes: &ChangeSet) -> MappedSpan {
	let from = changes.map_pos(span.from, Bias::Left);
	let to = changes.map_pos(span.to, Bias::Right);
	MappedSpan {
		span: Span { from, to: to.max(from) },
		collapsed: !span.is_empty() && from >= to,
	}
}

/// Remaps a pending suggestion in place, invalidating it on collapse.
///
/// Returns true while the suggestion is still pending.
pub(crate) fn remap_suggestion(suggestion: &mut Suggestion, changes: &ChangeSet) -> bool {
	if !suggestion.is_pending() {
		return false;
	}

	let mapped = map_span(suggestion.range, changes);
	suggestion.range = mapped.span;
	if mapped.collapsed {
		suggestion.transition(SuggestionStatus::Invalid);
		tracing::debug!(id = %suggestion.id, at = mapped.span.from, "Suggestion range collapsed; invalidated");
		return false;
	}
	true
}
