//! Document transactions.
//!
//! A [`Transaction`] is one atomic edit step: a [`ChangeSet`] built against a
//! specific document length. Hosts apply it to their rope and hand the same
//! value to anything that tracks positions in that document.

mod changeset;
mod types;

pub use changeset::ChangeSet;
pub use types::{Bias, Change, EditSpan, Insertion, Operation, Tendril};

use crate::range::CharIdx;
use crate::{Rope, RopeSlice};


/// An atomic edit step against a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
	changes: ChangeSet,
}

impl Transaction {
	/// Creates a transaction that changes nothing in `doc`.
	pub fn identity(doc: RopeSlice) -> Self {
		let mut changes = ChangeSet::new(doc);
		changes.retain(doc.len_chars());
		Self { changes }
	}

	/// Builds a transaction from a list of changes.
	///
	/// Changes are applied in ascending order of `start`. Ends are clamped to the
	/// document, and a change that starts inside a previous one is truncated to
	/// begin where the previous change ended.
	pub fn change<I>(doc: RopeSlice, changes: I) -> Self
	where
		I: IntoIterator<Item = Change>,
	{
		let len = doc.len_chars();
		let mut changes: Vec<Change> = changes.into_iter().collect();
		changes.sort_by_key(|change| (change.start, change.end));

		let mut cs = ChangeSet::new(doc);
		let mut last = 0;

		for change in changes {
			let start = change.start.clamp(last, len);
			let end = change.end.clamp(start, len);

			cs.retain(start - last);
			cs.delete(end - start);
			if let Some(text) = change.replacement {
				cs.insert(text);
			}
			last = end;
		}

		cs.retain(len - last);
		Self { changes: cs }
	}

	/// Inserts `text` at `pos`.
	pub fn insert(doc: RopeSlice, pos: CharIdx, text: impl Into<String>) -> Self {
		Self::change(doc, [Change::insert(pos, text)])
	}

	/// Deletes `[from, to)`.
	pub fn delete(doc: RopeSlice, from: CharIdx, to: CharIdx) -> Self {
		Self::change(doc, [Change::delete(from, to)])
	}

	/// Replaces `[from, to)` with `text`.
	pub fn replace(doc: RopeSlice, from: CharIdx, to: CharIdx, text: impl Into<String>) -> Self {
		Self::change(doc, [Change::replace(from, to, text)])
	}

	/// Returns the underlying changeset.
	pub fn changes(&self) -> &ChangeSet {
		&self.changes
	}

	/// Returns true if the transaction leaves the document text untouched.
	pub fn is_identity(&self) -> bool {
		self.changes.is_identity()
	}

	/// Applies this transaction to `doc`.
	pub fn apply(&self, doc: &mut Rope) {
		self.changes.apply(doc);
	}

	/// Maps a position in the source document through this transaction.
	pub fn map_pos(&self, pos: CharIdx, bias: Bias) -> CharIdx {
		self.changes.map_pos(pos, bias)
	}
}
