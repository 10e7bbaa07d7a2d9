//! Document - the text a session edits.
//!
//! A [`Document`] owns a rope and a version counter. It is the stand-in for
//! whatever host engine stores the real text: transactions go in, nothing else
//! touches the content.

use std::sync::atomic::{AtomicU64, Ordering};

use redline_primitives::{Rope, RopeSlice, Transaction};
use thiserror::Error;

use crate::suggestion::SuggestionId;

/// Counter for generating unique document IDs.
static NEXT_DOCUMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub u64);

impl DocumentId {
	/// Generates a new unique document ID.
	pub fn next() -> Self {
		Self(NEXT_DOCUMENT_ID.fetch_add(1, Ordering::Relaxed))
	}
}

/// Errors raised when a transaction cannot be applied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
	/// The transaction was built against a document of a different length.
	#[error("transaction expects a document of {expected} chars, found {actual}")]
	LengthMismatch {
		/// Source length the transaction was built for.
		expected: usize,
		/// Current document length.
		actual: usize,
	},

	/// A suggestion attached to a commit is reversed or runs past the end of
	/// the document it will land in.
	#[error("suggestion {id} range {from}..{to} does not fit a document of {len} chars")]
	InvalidRange {
		/// The offending suggestion.
		id: SuggestionId,
		from: usize,
		to: usize,
		/// Document length after the commit's transaction.
		len: usize,
	},
}

/// A plain-text document.
pub struct Document {
	/// Unique identifier for this document.
	pub id: DocumentId,

	/// The text content.
	content: Rope,

	/// Document version, incremented on every transaction that changes text.
	version: u64,
}

impl Document {
	/// Creates a new document with the given content.
	pub fn new(content: &str) -> Self {
		Self {
			id: DocumentId::next(),
			content: Rope::from(content),
			version: 0,
		}
	}

	/// Creates an empty document.
	pub fn scratch() -> Self {
		Self::new("")
	}

	pub fn content(&self) -> &Rope {
		&self.content
	}

	pub fn slice(&self) -> RopeSlice<'_> {
		self.content.slice(..)
	}

	pub fn len_chars(&self) -> usize {
		self.content.len_chars()
	}

	pub fn version(&self) -> u64 {
		self.version
	}

	/// Verifies that `tx` was built against a document of this length.
	pub fn check(&self, tx: &Transaction) -> Result<(), EditError> {
		let expected = tx.changes().len();
		let actual = self.content.len_chars();
		if expected != actual {
			tracing::warn!(doc_id = ?self.id, expected, actual, "Rejecting transaction built for a different document length");
			return Err(EditError::LengthMismatch { expected, actual });
		}
		Ok(())
	}

	/// Applies `tx`, bumping the version when text actually changed.
	///
	/// Returns whether the text changed.
	pub fn apply(&mut self, tx: &Transaction) -> Result<bool, EditError> {
		self.check(tx)?;

		if tx.is_identity() {
			return Ok(false);
		}

		tx.apply(&mut self.content);
		self.version += 1;
		Ok(true)
	}
}

impl std::fmt::Debug for Document {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Document")
			.field("id", &self.id)
			.field("len_chars", &self.content.len_chars())
			.field("version", &self.version)
			.finish()
	}
}
