use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use redline_primitives::Span;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Counter for generating unique suggestion IDs within a process.
static NEXT_SUGGESTION_SEQ: AtomicU64 = AtomicU64::new(1);

/// Caller-generated identifier for a suggestion.
///
/// Uniqueness is the caller's responsibility; the store never deduplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuggestionId(String);

impl SuggestionId {
	/// Wraps a caller-chosen id.
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	/// Generates a fresh id of the form `sugg-<epoch-ms>-<seq>`.
	pub fn generate() -> Self {
		let seq = NEXT_SUGGESTION_SEQ.fetch_add(1, Ordering::Relaxed);
		Self(format!("sugg-{}-{seq}", chrono::Utc::now().timestamp_millis()))
	}

	/// Returns the id as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for SuggestionId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for SuggestionId {
	fn from(id: &str) -> Self {
		Self::new(id)
	}
}

impl From<String> for SuggestionId {
	fn from(id: String) -> Self {
		Self(id)
	}
}

/// Category of an edit suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SuggestionKind {
	Grammar,
	Style,
	Clarity,
	Conciseness,
}

/// Lifecycle status of a suggestion.
///
/// `Pending` is the only live state. The other three are terminal: a suggestion
/// in any of them is pruned from the active set on the next processing cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SuggestionStatus {
	#[default]
	Pending,
	Accepted,
	Rejected,
	Invalid,
}

impl SuggestionStatus {
	/// Returns true for every status except `Pending`.
	#[inline]
	pub fn is_terminal(self) -> bool {
		self != Self::Pending
	}
}

/// User action exposed by a suggestion's controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SuggestionAction {
	Accept,
	Reject,
}

impl SuggestionAction {
	/// Terminal status a suggestion reaches through this action.
	pub fn resolved_status(self) -> SuggestionStatus {
		match self {
			Self::Accept => SuggestionStatus::Accepted,
			Self::Reject => SuggestionStatus::Rejected,
		}
	}
}

/// Identifies one interactive control: which suggestion, which action.
///
/// A tag is inert data. Holding one grants nothing; it is re-resolved against
/// the live store when clicked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionTag {
	pub suggestion_id: SuggestionId,
	pub action: SuggestionAction,
}

impl ActionTag {
	/// Creates a tag for `action` on `suggestion_id`.
	pub fn new(suggestion_id: SuggestionId, action: SuggestionAction) -> Self {
		Self { suggestion_id, action }
	}
}

/// A proposed but unapplied text replacement.
///
/// Serializes to the metadata wire shape:
/// `{id, kind, deleteRange: {from, to}, originalText, suggestedText, status, timestamp}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
	pub id: SuggestionId,
	pub kind: SuggestionKind,
	/// Current half-open span in the live document.
	#[serde(rename = "deleteRange")]
	pub range: Span,
	/// Snapshot taken at creation. Display only; never checked against live text.
	pub original_text: String,
	pub suggested_text: String,
	#[serde(default)]
	pub status: SuggestionStatus,
	/// Creation time in epoch milliseconds.
	#[serde(rename = "timestamp")]
	pub created_at: i64,
}

impl Suggestion {
	/// Creates a pending suggestion stamped with the current time.
	pub fn new(
		id: impl Into<SuggestionId>,
		kind: SuggestionKind,
		range: Span,
		original_text: impl Into<String>,
		suggested_text: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			kind,
			range,
			original_text: original_text.into(),
			suggested_text: suggested_text.into(),
			status: SuggestionStatus::Pending,
			created_at: chrono::Utc::now().timestamp_millis(),
		}
	}

	/// Overrides the creation time, in epoch milliseconds.
	pub fn with_created_at(mut self, epoch_ms: i64) -> Self {
		self.created_at = epoch_ms;
		self
	}

	/// Sets the status directly, bypassing [`Suggestion::transition`].
	///
	/// Used to build inbound payloads that already carry a status.
	pub fn with_status(mut self, status: SuggestionStatus) -> Self {
		self.status = status;
		self
	}

	/// Returns true while the suggestion is unresolved.
	#[inline]
	pub fn is_pending(&self) -> bool {
		self.status == SuggestionStatus::Pending
	}

	/// Moves a pending suggestion into `to`.
	///
	/// Returns false (and changes nothing) when the suggestion is already
	/// terminal or `to` is `Pending`.
	pub fn transition(&mut self, to: SuggestionStatus) -> bool {
		if self.status.is_terminal() || !to.is_terminal() {
			return false;
		}
		self.status = to;
		true
	}
}
