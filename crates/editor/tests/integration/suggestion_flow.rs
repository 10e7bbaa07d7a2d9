use pretty_assertions::assert_eq;
use redline_editor::suggestion::WidgetPayload;
use redline_editor::{ClickTarget, EditCommit, SetChange, SuggestionId};
use redline_primitives::{Span, Transaction};

use crate::common::{session, suggestion_over};

const TEXT: &str = "Their going too the store tomorow.";

#[test]
fn review_pass_over_several_suggestions() {
	let mut session = session(TEXT);
	session.add_suggestion(suggestion_over(TEXT, "s1", 0, 5, "They're")).unwrap();
	session.add_suggestion(suggestion_over(TEXT, "s2", 12, 15, "to")).unwrap();
	session.add_suggestion(suggestion_over(TEXT, "s3", 26, 33, "tomorrow")).unwrap();
	assert_eq!(session.pending_count(), 3);

	// Accept from the middle so both neighbors have to be carried along.
	assert!(session.accept_suggestion(&"s2".into()));
	assert_eq!(session.text(), "Their going to the store tomorow.");
	let ranges: Vec<_> = session.suggestions().suggestions().iter().map(|s| s.range).collect();
	assert_eq!(ranges, vec![Span::new(0, 5), Span::new(25, 32)]);

	assert!(session.reject_suggestion(&"s1".into()));
	assert!(session.accept_suggestion(&"s3".into()));

	assert_eq!(session.text(), "Their going to the store tomorrow.");
	assert!(!session.has_pending_suggestion());
	assert!(session.decorations().is_empty());
}

#[test]
fn clicks_round_trip_through_rendered_attrs() {
	let mut session = session(TEXT);
	session.add_suggestion(suggestion_over(TEXT, "s1", 0, 5, "They're")).unwrap();

	let WidgetPayload::Controls { buttons, .. } = &session.decorations().widgets()[1].payload else {
		panic!("expected controls widget");
	};
	let [(_, id), (_, action)] = buttons[0].attrs();
	let target = ClickTarget::from_attrs(Some(id), Some(action));

	assert!(session.handle_click(&target));
	assert_eq!(session.text(), "They're going too the store tomorow.");
	assert!(!session.handle_click(&target));
}

#[test]
fn typing_at_boundaries_widens_the_span() {
	let mut session = session(TEXT);
	session.add_suggestion(suggestion_over(TEXT, "s2", 12, 15, "to")).unwrap();

	let before = Transaction::insert(session.document().slice(), 12, "x");
	session.apply_transaction(before).unwrap();
	let after = Transaction::insert(session.document().slice(), 16, "y");
	session.apply_transaction(after).unwrap();

	let range = session.suggestions().get(&"s2".into()).map(|s| s.range);
	assert_eq!(range, Some(Span::new(12, 17)));
}

#[test]
fn partial_overlap_shrinks_without_invalidating() {
	let mut session = session(TEXT);
	session.add_suggestion(suggestion_over(TEXT, "s3", 26, 33, "tomorrow")).unwrap();

	let tx = Transaction::delete(session.document().slice(), 20, 29);
	session.apply_transaction(tx).unwrap();

	let range = session.suggestions().get(&"s3".into()).map(|s| s.range);
	assert_eq!(range, Some(Span::new(20, 24)));
}

#[test]
fn replacement_commit_supersedes_set() {
	let mut session = session(TEXT);
	session.add_suggestion(suggestion_over(TEXT, "s1", 0, 5, "They're")).unwrap();
	session.add_suggestion(suggestion_over(TEXT, "s2", 12, 15, "to")).unwrap();

	let commit = EditCommit::meta_only(session.document().slice())
		.with_replacement(vec![suggestion_over(TEXT, "s9", 6, 11, "heading")]);
	let change = session.dispatch(commit).unwrap();

	assert_eq!(change, SetChange::Rebuilt);
	let ids: Vec<_> = session.suggestions().suggestions().iter().map(|s| s.id.clone()).collect();
	assert_eq!(ids, vec![SuggestionId::from("s9")]);
}

#[test]
fn duplicate_ids_resolve_together() {
	let mut session = session(TEXT);
	session.add_suggestion(suggestion_over(TEXT, "dup", 0, 5, "They're")).unwrap();
	session.add_suggestion(suggestion_over(TEXT, "dup", 26, 33, "tomorrow")).unwrap();
	assert_eq!(session.pending_count(), 2);

	assert!(session.accept_suggestion(&"dup".into()));

	assert_eq!(session.text(), "They're going too the store tomorow.");
	assert_eq!(session.pending_count(), 0);
}
