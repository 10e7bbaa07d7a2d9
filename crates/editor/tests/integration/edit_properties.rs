use proptest::prelude::*;
use redline_editor::suggestion::render;
use redline_editor::{Session, Suggestion, SuggestionKind};
use redline_primitives::{Span, Transaction};

/// A document, one suggestion span `[a, b)` inside it, and an edit
/// `[start, end) -> text` that ends strictly before `a`.
fn arb_edit_before_span() -> impl Strategy<Value = (String, Span, usize, usize, String)> {
	"[a-z ]{8,60}".prop_flat_map(|doc| {
		let len = doc.chars().count();
		(Just(doc), 2..len).prop_flat_map(|(doc, a)| {
			let len = doc.chars().count();
			(Just(doc), Just(a), (a + 1)..=len, 0..a).prop_flat_map(|(doc, a, b, start)| {
				(Just(doc), Just(Span::new(a, b)), Just(start), start..a, "[A-Z]{0,6}")
			})
		})
	})
}

/// A document, one suggestion span, and an arbitrary replace edit anywhere.
fn arb_any_edit() -> impl Strategy<Value = (String, Span, usize, usize, String)> {
	"[a-z ]{1,60}".prop_flat_map(|doc| {
		let len = doc.chars().count();
		(Just(doc), 0..=len, 0..=len, 0..=len, 0..=len, "[A-Z]{0,6}").prop_map(|(doc, a, b, x, y, text)| {
			(doc, Span::new(a, b), x.min(y), x.max(y), text)
		})
	})
}

fn session_with(doc: &str, span: Span) -> Session {
	let mut session = Session::new(doc);
	let original: String = doc.chars().skip(span.from).take(span.len()).collect();
	session
		.add_suggestion(Suggestion::new("s", SuggestionKind::Style, span, original, "replacement"))
		.unwrap();
	session
}

proptest! {
	/// Edits strictly before a suggestion shift it by exactly the edit delta.
	#[test]
	fn prop_pure_translation((doc, span, start, end, text) in arb_edit_before_span()) {
		let mut session = session_with(&doc, span);
		let delta = text.chars().count() as isize - (end - start) as isize;

		let tx = Transaction::replace(session.document().slice(), start, end, text);
		session.apply_transaction(tx).unwrap();

		let moved = session.suggestions().get(&"s".into()).map(|s| s.range);
		prop_assert_eq!(moved, Some(span.shift(delta)));
	}

	/// Mapped decorations always match a fresh render of the surviving set.
	#[test]
	fn prop_decorations_track_state((doc, span, start, end, text) in arb_any_edit()) {
		let mut session = session_with(&doc, span);

		let tx = Transaction::replace(session.document().slice(), start, end, text);
		session.apply_transaction(tx).unwrap();

		let fresh = render(session.document().slice(), session.suggestions().suggestions(), session.config());
		prop_assert_eq!(session.decorations(), &fresh);
	}

	/// Accepting the only suggestion always yields its text at its start.
	#[test]
	fn prop_accept_inserts_suggested_text((doc, span, _start, _end, _text) in arb_any_edit()) {
		let mut session = session_with(&doc, span);

		prop_assert!(session.accept_suggestion(&"s".into()));

		let text = session.text();
		let inserted: String = text.chars().skip(span.from).take("replacement".len()).collect();
		prop_assert_eq!(inserted, "replacement");
		prop_assert_eq!(text.chars().count(), doc.chars().count() - span.len() + "replacement".len());
		prop_assert!(!session.has_pending_suggestion());
	}
}
