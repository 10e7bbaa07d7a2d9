//! Turning clicks on suggestion controls into commits.

use redline_primitives::{RopeSlice, Transaction, max_cursor_pos};

use super::store::SuggestionState;
use super::types::{ActionTag, Suggestion, SuggestionAction, SuggestionId};
use crate::commit::{EditCommit, EditOrigin};

/// What a delegated click landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
	/// An accept or reject control.
	Action(ActionTag),
	/// Anything else; left to the host.
	Other,
}

impl ClickTarget {
	/// Rebuilds a target from a control's data attributes.
	///
	/// Missing attributes or an unknown action name yield [`ClickTarget::Other`].
	pub fn from_attrs(suggestion_id: Option<&str>, action: Option<&str>) -> Self {
		let (Some(id), Some(action)) = (suggestion_id, action) else {
			return Self::Other;
		};
		match action.parse::<SuggestionAction>() {
			Ok(action) => Self::Action(ActionTag::new(SuggestionId::new(id), action)),
			Err(_) => Self::Other,
		}
	}
}

impl From<ActionTag> for ClickTarget {
	fn from(tag: ActionTag) -> Self {
		Self::Action(tag)
	}
}

/// A resolved action, ready to submit.
#[derive(Debug, Clone)]
pub struct Resolution {
	/// Snapshot of the target, moved into its terminal status.
	pub resolved: Suggestion,
	pub commit: EditCommit,
}

/// Builds the commit for `tag` against the current document and state.
///
/// Returns `None` when the id is no longer active.
pub fn resolve_action(doc: RopeSlice, state: &SuggestionState, tag: &ActionTag) -> Option<Resolution> {
	let Some(target) = state.get(&tag.suggestion_id) else {
		tracing::debug!(id = %tag.suggestion_id, action = %tag.action, "Ignoring action on inactive suggestion");
		return None;
	};

	let mut resolved = target.clone();
	resolved.transition(tag.action.resolved_status());

	let commit = match tag.action {
		SuggestionAction::Accept => {
			let span = target.range.clamp(max_cursor_pos(doc));
			let tx = Transaction::replace(doc, span.from, span.to, target.suggested_text.as_str());
			let remaining = state.remaining_after(&tag.suggestion_id, Some(tx.changes()));
			EditCommit::new(tx)
				.with_replacement(remaining)
				.with_origin(EditOrigin::Internal("suggestion.accept"))
		}
		SuggestionAction::Reject => EditCommit::meta_only(doc)
			.with_replacement(state.remaining_after(&tag.suggestion_id, None))
			.with_origin(EditOrigin::Internal("suggestion.reject")),
	};

	Some(Resolution { resolved, commit })
}
