//! Suggestion lifecycle: the reducer run on every commit.

use redline_primitives::{ChangeSet, Span};

use super::mapping::remap_suggestion;
use super::types::{Suggestion, SuggestionId};
use crate::commit::EditCommit;

/// How the active set changed during one reducer cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetChange {
	/// Nothing to redraw: no suggestions moved, none were added or removed.
	Unchanged,
	/// Same suggestions, new positions. Existing decorations can be mapped.
	Remapped,
	/// Membership changed (add, replace, or invalidation). Decorations must be rebuilt.
	Rebuilt,
}

/// Result of one [`SuggestionState::apply`] cycle.
#[derive(Debug, Clone)]
pub struct ApplyOutcome {
	pub state: SuggestionState,
	pub change: SetChange,
	/// Suggestions invalidated by range collapse during this cycle.
	pub invalidated: Vec<SuggestionId>,
}

/// The active suggestion set for one document.
///
/// Only pending suggestions are ever held. Order is insertion order, and
/// duplicate ids are kept side by side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionState {
	suggestions: Vec<Suggestion>,
}

impl SuggestionState {
	/// Creates an empty state.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a state from arbitrary suggestions, dropping any that are not pending.
	pub fn from_suggestions(suggestions: impl IntoIterator<Item = Suggestion>) -> Self {
		Self {
			suggestions: suggestions.into_iter().filter(Suggestion::is_pending).collect(),
		}
	}

	/// Active suggestions in insertion order.
	pub fn suggestions(&self) -> &[Suggestion] {
		&self.suggestions
	}

	/// Number of active suggestions, duplicates included.
	pub fn len(&self) -> usize {
		self.suggestions.len()
	}

	/// Returns true if nothing is active.
	pub fn is_empty(&self) -> bool {
		self.suggestions.is_empty()
	}

	/// Returns the first active suggestion with `id`.
	pub fn get(&self, id: &SuggestionId) -> Option<&Suggestion> {
		self.suggestions.iter().find(|s| &s.id == id && s.is_pending())
	}

	/// Returns true if an active suggestion has `id`.
	pub fn contains(&self, id: &SuggestionId) -> bool {
		self.get(id).is_some()
	}

	/// Active suggestions whose spans overlap `span`, in insertion order.
	///
	/// Overlaps are allowed; nothing reconciles them.
	pub fn overlapping(&self, span: Span) -> impl Iterator<Item = &Suggestion> + '_ {
		self.suggestions.iter().filter(move |s| s.range.overlaps(&span))
	}

	/// Runs one lifecycle cycle for `commit`.
	///
	/// Remaps every pending suggestion, invalidates collapsed ones, drops every
	/// non-pending entry, then appends the added suggestion and finally lets a
	/// replacement payload supersede the result.
	pub fn apply(&self, commit: &EditCommit) -> ApplyOutcome {
		let changes = commit.transaction().changes();
		let text_changed = !changes.is_identity();

		let mut invalidated = Vec::new();
		let mut next: Vec<Suggestion> = Vec::with_capacity(self.suggestions.len() + 1);
		for suggestion in self.suggestions.iter().filter(|s| s.is_pending()) {
			let mut suggestion = suggestion.clone();
			if text_changed && !remap_suggestion(&mut suggestion, changes) {
				invalidated.push(suggestion.id.clone());
				continue;
			}
			next.push(suggestion);
		}

		let mut rebuilt = !invalidated.is_empty();

		if let Some(added) = commit.added() {
			let overlapping = next.iter().filter(|s| s.range.overlaps(&added.range)).count();
			tracing::debug!(id = %added.id, kind = %added.kind, from = added.range.from, to = added.range.to, overlapping, "Adding suggestion");
			next.push(added.clone());
			rebuilt = true;
		}

		if let Some(replacement) = commit.replacement() {
			tracing::debug!(origin = ?commit.origin(), before = next.len(), after = replacement.len(), "Replacing suggestion set");
			next = replacement.to_vec();
			rebuilt = true;
		}

		next.retain(Suggestion::is_pending);

		let change = if rebuilt {
			SetChange::Rebuilt
		} else if text_changed && !next.is_empty() {
			SetChange::Remapped
		} else {
			SetChange::Unchanged
		};

		tracing::trace!(pending = next.len(), ?change, invalidated = invalidated.len(), "Suggestion cycle complete");

		ApplyOutcome {
			state: Self { suggestions: next },
			change,
			invalidated,
		}
	}

	/// Every active suggestion except those with `id`, optionally mapped through
	/// `changes` so the result is valid after that edit.
	///
	/// Suggestions that collapse under `changes` are left out.
	pub(crate) fn remaining_after(&self, id: &SuggestionId, changes: Option<&ChangeSet>) -> Vec<Suggestion> {
		self.suggestions
			.iter()
			.filter(|s| &s.id != id && s.is_pending())
			.filter_map(|s| {
				let mut s = s.clone();
				match changes {
					Some(changes) if !changes.is_identity() => remap_suggestion(&mut s, changes).then_some(s),
					_ => Some(s),
				}
			})
			.collect()
	}
}
