//! Edit commits: a transaction plus the suggestion metadata riding on it.

use redline_primitives::{RopeSlice, Transaction};

use crate::document::EditError;
use crate::suggestion::Suggestion;

/// Where an edit came from. Used for logging only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditOrigin {
	/// Direct user input routed through the host.
	#[default]
	User,
	/// Generated by an engine command, tagged with a short label.
	Internal(&'static str),
}

/// Suggestion metadata attached to a commit.
///
/// All spans are expressed in post-transaction coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionMeta {
	/// Appended to the active set after remapping.
	pub add: Option<Suggestion>,
	/// Wholly supersedes the active set for this cycle.
	pub replace: Option<Vec<Suggestion>>,
}

impl SuggestionMeta {
	/// Returns true if the commit carries no suggestion metadata.
	pub fn is_empty(&self) -> bool {
		self.add.is_none() && self.replace.is_none()
	}
}

/// One unit of work for the session: text changes and suggestion metadata,
/// applied atomically.
#[derive(Debug, Clone)]
pub struct EditCommit {
	tx: Transaction,
	meta: SuggestionMeta,
	origin: EditOrigin,
}

impl EditCommit {
	/// Wraps `tx` with no metadata, tagged as a user edit.
	pub fn new(tx: Transaction) -> Self {
		Self {
			tx,
			meta: SuggestionMeta::default(),
			origin: EditOrigin::User,
		}
	}

	/// A commit that leaves the text of `doc` untouched and only carries metadata.
	pub fn meta_only(doc: RopeSlice) -> Self {
		Self::new(Transaction::identity(doc))
	}

	/// Attaches one suggestion to append after remapping.
	pub fn with_added(mut self, suggestion: Suggestion) -> Self {
		self.meta.add = Some(suggestion);
		self
	}

	/// Attaches a set that supersedes the active one.
	pub fn with_replacement(mut self, suggestions: Vec<Suggestion>) -> Self {
		self.meta.replace = Some(suggestions);
		self
	}

	/// Tags the commit's source for logging.
	pub fn with_origin(mut self, origin: EditOrigin) -> Self {
		self.origin = origin;
		self
	}

	/// Returns the text edit.
	pub fn transaction(&self) -> &Transaction {
		&self.tx
	}

	/// Returns the attached suggestion metadata.
	pub fn meta(&self) -> &SuggestionMeta {
		&self.meta
	}

	/// Returns the suggestion to append, if any.
	pub fn added(&self) -> Option<&Suggestion> {
		self.meta.add.as_ref()
	}

	/// Returns the superseding set, if any.
	pub fn replacement(&self) -> Option<&[Suggestion]> {
		self.meta.replace.as_deref()
	}

	/// Returns where the commit came from.
	pub fn origin(&self) -> EditOrigin {
		self.origin
	}

	/// Checks every pending suggestion in the metadata against the document
	/// as it will be after this commit's transaction.
	///
	/// Ranges must be ordered and end within the post-edit text.
	pub fn validate(&self) -> Result<(), EditError> {
		let len = self.tx.changes().len_after();
		let attached = self.meta.add.iter().chain(self.meta.replace.iter().flatten());
		for suggestion in attached.filter(|s| s.is_pending()) {
			let range = suggestion.range;
			if !range.is_ordered() || range.to > len {
				return Err(EditError::InvalidRange {
					id: suggestion.id.clone(),
					from: range.from,
					to: range.to,
					len,
				});
			}
		}
		Ok(())
	}
}

impl From<Transaction> for EditCommit {
	fn from(tx: Transaction) -> Self {
		Self::new(tx)
	}
}
