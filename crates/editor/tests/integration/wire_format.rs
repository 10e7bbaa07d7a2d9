use pretty_assertions::assert_eq;
use redline_editor::{Suggestion, SuggestionKind, SuggestionStatus};
use redline_primitives::Span;
use serde_json::json;

#[test]
fn suggestion_serializes_to_metadata_shape() {
	let suggestion = Suggestion::new("sugg-1-1", SuggestionKind::Conciseness, Span::new(4, 19), "in order to", "to")
		.with_created_at(1_700_000_000_000);

	assert_eq!(
		serde_json::to_value(&suggestion).unwrap(),
		json!({
			"id": "sugg-1-1",
			"kind": "conciseness",
			"deleteRange": { "from": 4, "to": 19 },
			"originalText": "in order to",
			"suggestedText": "to",
			"status": "pending",
			"timestamp": 1_700_000_000_000_i64,
		})
	);
}

#[test]
fn inbound_metadata_without_status_is_pending() {
	let payload = json!({
		"id": "abc",
		"kind": "style",
		"deleteRange": { "from": 0, "to": 3 },
		"originalText": "Teh",
		"suggestedText": "The",
		"timestamp": 42,
	});

	let suggestion: Suggestion = serde_json::from_value(payload).unwrap();

	assert_eq!(suggestion.status, SuggestionStatus::Pending);
	assert_eq!(suggestion.kind, SuggestionKind::Style);
	assert_eq!(suggestion.range, Span::new(0, 3));
	assert_eq!(suggestion.created_at, 42);
}

#[test]
fn replace_payload_is_an_ordered_array() {
	let payload = json!([
		{ "id": "b", "kind": "grammar", "deleteRange": { "from": 9, "to": 12 }, "originalText": "x", "suggestedText": "y", "status": "pending", "timestamp": 2 },
		{ "id": "a", "kind": "clarity", "deleteRange": { "from": 0, "to": 1 }, "originalText": "x", "suggestedText": "y", "status": "rejected", "timestamp": 1 },
	]);

	let set: Vec<Suggestion> = serde_json::from_value(payload).unwrap();

	let ids: Vec<_> = set.iter().map(|s| s.id.as_str()).collect();
	assert_eq!(ids, vec!["b", "a"]);
	assert_eq!(set[1].status, SuggestionStatus::Rejected);
}

#[test]
fn unknown_kind_is_refused() {
	let payload = json!({
		"id": "abc",
		"kind": "tone",
		"deleteRange": { "from": 0, "to": 3 },
		"originalText": "Teh",
		"suggestedText": "The",
		"timestamp": 42,
	});

	assert!(serde_json::from_value::<Suggestion>(payload).is_err());
}

#[test]
fn reversed_delete_range_is_refused() {
	let payload = json!({
		"id": "abc",
		"kind": "grammar",
		"deleteRange": { "from": 8, "to": 4 },
		"originalText": "cat ",
		"suggestedText": "dog ",
		"timestamp": 42,
	});

	let err = serde_json::from_value::<Suggestion>(payload).unwrap_err();
	assert!(err.to_string().contains("precedes start"), "unexpected error: {err}");
}

#[test]
fn inbound_range_past_end_is_not_attached() {
	let payload = json!({
		"id": "late",
		"kind": "grammar",
		"deleteRange": { "from": 5, "to": 8 },
		"originalText": "",
		"suggestedText": "ZZZ",
		"timestamp": 42,
	});
	let suggestion: Suggestion = serde_json::from_value(payload).unwrap();

	let mut session = crate::common::session("abc");
	assert!(session.add_suggestion(suggestion).is_err());
	assert!(!session.has_pending_suggestion());
	assert_eq!(session.text(), "abc");
}
