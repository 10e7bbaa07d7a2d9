use redline_primitives::{Span, Transaction};

use crate::Session;
use crate::suggestion::{Suggestion, SuggestionId, SuggestionKind, render};

fn sugg(id: &str, from: usize, to: usize, original: &str, suggested: &str) -> Suggestion {
	Suggestion::new(id, SuggestionKind::Grammar, Span::new(from, to), original, suggested)
}

/// Must treat a second reject of the same id as a no-op.
///
/// - Enforced in: `resolve_action`, `Session::reject_suggestion`
/// - Failure symptom: Double-clicking reject mutates state or reports the click as handled.
#[cfg_attr(test, test)]
pub(crate) fn test_idempotent_rejection() {
	let mut session = Session::new("Teh cat sat.");
	session.add_suggestion(sugg("a", 0, 3, "Teh", "The")).unwrap();
	session.add_suggestion(sugg("b", 4, 7, "cat", "dog")).unwrap();

	assert!(session.reject_suggestion(&"a".into()));
	let state = session.suggestions().clone();
	let text = session.text();

	assert!(!session.reject_suggestion(&"a".into()));
	assert_eq!(session.suggestions(), &state);
	assert_eq!(session.text(), text);
}

/// Must shift every suggestion by the edit delta when an edit lands strictly before it.
///
/// - Enforced in: `map_span`, `SuggestionState::apply`
/// - Failure symptom: Strike-through drifts away from the text it refers to after typing earlier in the document.
#[cfg_attr(test, test)]
pub(crate) fn test_pure_translation() {
	let mut session = Session::new("Teh cat sat on the mat.");
	session.add_suggestion(sugg("a", 8, 11, "sat", "rested")).unwrap();
	session.add_suggestion(sugg("b", 19, 22, "mat", "rug")).unwrap();

	let tx = Transaction::replace(session.document().slice(), 0, 3, "A lone");
	session.apply_transaction(tx).unwrap();

	let ranges: Vec<_> = session.suggestions().suggestions().iter().map(|s| s.range).collect();
	assert_eq!(ranges, vec![Span::new(11, 14), Span::new(22, 25)]);
	assert_eq!(session.text(), "A lone cat sat on the mat.");
}

/// Must invalidate and remove a suggestion whose whole span is deleted.
///
/// - Enforced in: `remap_suggestion`
/// - Failure symptom: A zero-width suggestion lingers with controls that replace nothing.
#[cfg_attr(test, test)]
pub(crate) fn test_collapse_invalidation() {
	let mut session = Session::new("Teh cat sat.");
	session.add_suggestion(sugg("a", 4, 7, "cat", "dog")).unwrap();

	let tx = Transaction::delete(session.document().slice(), 4, 7);
	session.apply_transaction(tx).unwrap();

	assert!(!session.suggestions().contains(&"a".into()));
	assert!(!session.has_pending_suggestion());
	assert!(session.decorations().is_empty());
}

/// Must apply exactly the suggested text and drop the suggestion on accept.
///
/// - Enforced in: `resolve_action`, `Session::accept_suggestion`
/// - Failure symptom: Accepting leaves stale decorations behind or mangles neighboring text.
#[cfg_attr(test, test)]
pub(crate) fn test_accept_round_trip() {
	let mut session = Session::new("Teh cat sat.");
	session.add_suggestion(sugg("a", 0, 3, "Teh", "The")).unwrap();

	assert!(session.accept_suggestion(&"a".into()));

	assert_eq!(session.text(), "The cat sat.");
	assert!(!session.suggestions().contains(&"a".into()));
	assert!(session.decorations().suggestion_ids().is_empty());
}

/// Must keep a disjoint suggestion alive, shifted by the accept delta, when another is accepted.
///
/// - Enforced in: `SuggestionState::remaining_after`, `resolve_action`
/// - Failure symptom: Accepting one suggestion silently discards or misplaces its neighbors.
#[cfg_attr(test, test)]
pub(crate) fn test_disjoint_independence() {
	let text = "Hello world, this is a test document.";
	let mut session = Session::new(text);
	session
		.add_suggestion(Suggestion::new("a", SuggestionKind::Style, Span::new(0, 5), "Hello", "Greetings"))
		.unwrap();
	let b = Suggestion::new("b", SuggestionKind::Clarity, Span::new(20, 25), " a te", "one t");
	session.add_suggestion(b.clone()).unwrap();

	assert!(session.accept_suggestion(&"a".into()));

	let survivor = session.suggestions().get(&SuggestionId::from("b")).expect("b survives");
	assert_eq!(survivor.range, Span::new(24, 29));
	assert_eq!(survivor.kind, b.kind);
	assert_eq!(survivor.original_text, b.original_text);
	assert_eq!(survivor.suggested_text, b.suggested_text);
	assert!(survivor.is_pending());
}

/// Must render decorations for pending suggestions only, and for all of them.
///
/// - Enforced in: `render`
/// - Failure symptom: Resolved suggestions keep their controls, or live ones vanish from view.
#[cfg_attr(test, test)]
pub(crate) fn test_decoration_selectivity() {
	let mut session = Session::new("Teh cat sat on the mat.");
	session.add_suggestion(sugg("a", 0, 3, "Teh", "The")).unwrap();
	session.add_suggestion(sugg("b", 8, 11, "sat", "rested")).unwrap();
	session.add_suggestion(sugg("c", 19, 22, "mat", "rug")).unwrap();
	assert!(session.reject_suggestion(&"b".into()));

	let ids: Vec<String> = session.decorations().suggestion_ids().iter().map(|id| id.to_string()).collect();
	assert_eq!(ids, vec!["a".to_string(), "c".to_string()]);

	let fresh = render(session.document().slice(), session.suggestions().suggestions(), session.config());
	assert_eq!(session.decorations(), &fresh);
}
