//! Common utilities for suggestion integration tests.

use redline_editor::{Session, Suggestion, SuggestionKind};
use redline_primitives::Span;

/// Opens a session over `text` with logging wired to the test harness.
pub fn session(text: &str) -> Session {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
	Session::new(text)
}

/// Builds a pending suggestion whose original text is read from `text`.
pub fn suggestion_over(text: &str, id: &str, from: usize, to: usize, suggested: &str) -> Suggestion {
	let original: String = text.chars().skip(from).take(to - from).collect();
	Suggestion::new(id, SuggestionKind::Grammar, Span::new(from, to), original, suggested)
}
