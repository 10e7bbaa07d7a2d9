//! Cheap "is anything pending?" queries for unrelated UI.

use super::store::SuggestionState;

/// True while any suggestion anywhere in the document is unresolved.
///
/// Floating menus and similar chrome consult this to stay hidden; it ignores
/// the current selection entirely.
#[inline]
pub fn has_pending_suggestion(state: &SuggestionState) -> bool {
	state.suggestions().iter().any(|s| s.is_pending())
}

/// Number of unresolved suggestions.
pub fn pending_count(state: &SuggestionState) -> usize {
	state.suggestions().iter().filter(|s| s.is_pending()).count()
}
