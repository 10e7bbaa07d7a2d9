//! Session - one document, its suggestions, and their decorations.
//!
//! Every change flows through [`Session::dispatch`]: the document applies the
//! transaction, the suggestion reducer runs, decorations are mapped or
//! rebuilt, and commit listeners are told. Accept, reject and new suggestions
//! are all just commits built by the layers below.

use redline_primitives::{CharIdx, Span, Transaction, span_text};

use crate::commit::EditCommit;
use crate::config::SuggestionConfig;
use crate::document::{Document, EditError};
use crate::generate::{GenerationRequest, SuggestError, TextGenerator, Transformation};
use crate::suggestion::{
	ActionTag, ClickTarget, DecorationSet, SetChange, Suggestion, SuggestionAction, SuggestionId, SuggestionState,
	gate, render, resolve_action,
};


/// What a commit listener sees after each commit.
#[derive(Debug, Clone, Copy)]
pub struct CommitEvent<'a> {
	/// Document version after the commit.
	pub version: u64,
	pub change: SetChange,
	pub text_changed: bool,
	pub decorations: &'a DecorationSet,
}

/// Callback invoked after every commit.
pub type CommitListener = Box<dyn FnMut(&CommitEvent<'_>) + Send>;

/// Owns the document and the suggestion overlay state for it.
pub struct Session {
	document: Document,
	suggestions: SuggestionState,
	decorations: DecorationSet,
	config: SuggestionConfig,
	listeners: Vec<CommitListener>,
}

impl Session {
	/// Opens a session over `text` with the default config.
	pub fn new(text: &str) -> Self {
		Self {
			document: Document::new(text),
			suggestions: SuggestionState::new(),
			decorations: DecorationSet::empty(),
			config: SuggestionConfig::default(),
			listeners: Vec::new(),
		}
	}

	/// Replaces the presentation config and re-renders.
	pub fn with_config(mut self, config: SuggestionConfig) -> Self {
		self.config = config;
		self.rebuild_decorations();
		self
	}

	/// Returns the underlying document.
	pub fn document(&self) -> &Document {
		&self.document
	}

	/// Returns the current text as an owned string.
	pub fn text(&self) -> String {
		self.document.content().to_string()
	}

	/// Returns the active suggestion set.
	pub fn suggestions(&self) -> &SuggestionState {
		&self.suggestions
	}

	/// Returns the decorations for the host to paint.
	pub fn decorations(&self) -> &DecorationSet {
		&self.decorations
	}

	/// Returns the presentation config.
	pub fn config(&self) -> &SuggestionConfig {
		&self.config
	}

	/// Registers a callback run after every commit.
	pub fn on_commit(&mut self, listener: impl FnMut(&CommitEvent<'_>) + Send + 'static) {
		self.listeners.push(Box::new(listener));
	}

	/// Applies `commit` atomically: text first, then the suggestion cycle.
	///
	/// A commit built for a different document length, or carrying a
	/// suggestion whose range does not fit the edited text, is rejected before
	/// any state changes.
	pub fn dispatch(&mut self, commit: EditCommit) -> Result<SetChange, EditError> {
		self.document.check(commit.transaction())?;
		commit.validate().inspect_err(|error| {
			tracing::warn!(%error, origin = ?commit.origin(), "Rejecting commit with invalid suggestion range");
		})?;
		let text_changed = self.document.apply(commit.transaction())?;

		let outcome = self.suggestions.apply(&commit);
		self.suggestions = outcome.state;
		for id in &outcome.invalidated {
			tracing::debug!(%id, version = self.document.version(), "Suggestion invalidated by edit");
		}

		match outcome.change {
			SetChange::Rebuilt => self.rebuild_decorations(),
			SetChange::Remapped => self.decorations.map(commit.transaction().changes()),
			SetChange::Unchanged => {}
		}

		let event = CommitEvent {
			version: self.document.version(),
			change: outcome.change,
			text_changed,
			decorations: &self.decorations,
		};
		for listener in &mut self.listeners {
			listener(&event);
		}

		Ok(outcome.change)
	}

	/// Applies a plain text edit.
	pub fn apply_transaction(&mut self, tx: Transaction) -> Result<SetChange, EditError> {
		self.dispatch(EditCommit::new(tx))
	}

	/// Attaches `suggestion` without touching the text.
	///
	/// Fails with [`EditError::InvalidRange`] when the range is reversed or
	/// ends past the document.
	pub fn add_suggestion(&mut self, suggestion: Suggestion) -> Result<SetChange, EditError> {
		let commit = EditCommit::meta_only(self.document.slice()).with_added(suggestion);
		self.dispatch(commit)
	}

	/// Applies the suggestion with `id`. Returns false if it is no longer active.
	pub fn accept_suggestion(&mut self, id: &SuggestionId) -> bool {
		self.resolve(&ActionTag::new(id.clone(), SuggestionAction::Accept))
	}

	/// Discards the suggestion with `id`. Returns false if it is no longer active.
	pub fn reject_suggestion(&mut self, id: &SuggestionId) -> bool {
		self.resolve(&ActionTag::new(id.clone(), SuggestionAction::Reject))
	}

	/// Delegated click handler. Returns whether the click was consumed.
	pub fn handle_click(&mut self, target: &ClickTarget) -> bool {
		match target {
			ClickTarget::Action(tag) => self.resolve(tag),
			ClickTarget::Other => false,
		}
	}

	/// Returns true while any suggestion is unresolved.
	pub fn has_pending_suggestion(&self) -> bool {
		gate::has_pending_suggestion(&self.suggestions)
	}

	/// Returns the number of unresolved suggestions.
	pub fn pending_count(&self) -> usize {
		gate::pending_count(&self.suggestions)
	}

	/// Asks `generator` to rewrite `[from, to)` and attaches the result as a
	/// pending suggestion.
	///
	/// The session stays borrowed across the await, so the selection cannot
	/// move under the request. On any error the session is left untouched.
	pub async fn request_suggestion<G>(
		&mut self,
		generator: &G,
		from: CharIdx,
		to: CharIdx,
		transformation: Transformation,
	) -> Result<SuggestionId, SuggestError>
	where
		G: TextGenerator + ?Sized,
	{
		let len = self.document.len_chars();
		if from > len || to > len {
			return Err(SuggestError::OutOfBounds { from, to, len });
		}
		let span = Span::new(from, to);
		if span.is_empty() {
			return Err(SuggestError::EmptySelection);
		}

		let original = span_text(self.document.slice(), span);
		let kind = transformation.default_kind();
		let request = GenerationRequest {
			text: original.clone(),
			transformation,
		};

		let suggested = generator.generate(&request).await.inspect_err(|error| {
			tracing::warn!(%error, transformation = %request.transformation, "Text generation failed");
		})?;
		if suggested == original {
			return Err(SuggestError::NoChange);
		}

		let suggestion = Suggestion::new(SuggestionId::generate(), kind, span, original, suggested);
		let id = suggestion.id.clone();
		self.add_suggestion(suggestion)?;
		Ok(id)
	}

	fn resolve(&mut self, tag: &ActionTag) -> bool {
		let Some(resolution) = resolve_action(self.document.slice(), &self.suggestions, tag) else {
			return false;
		};
		match self.dispatch(resolution.commit) {
			Ok(_) => {
				tracing::debug!(id = %resolution.resolved.id, status = %resolution.resolved.status, "Suggestion resolved");
				true
			}
			Err(error) => {
				tracing::warn!(%error, id = %tag.suggestion_id, "Failed to apply suggestion action");
				false
			}
		}
	}

	fn rebuild_decorations(&mut self) {
		self.decorations = render(self.document.slice(), self.suggestions.suggestions(), &self.config);
	}
}

impl std::fmt::Debug for Session {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Session")
			.field("document", &self.document)
			.field("suggestions", &self.suggestions)
			.field("listeners", &self.listeners.len())
			.finish()
	}
}
