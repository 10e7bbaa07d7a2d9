#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Suggestion overlay engine.
//!
//! Proposed edits ("suggestions") ride on top of a live document as
//! decorations: a strike-out over the original text, the replacement beside
//! it, and accept/reject controls. Suggestions track their text through
//! arbitrary edits and disappear once the text they referred to is gone.
//!
//! # Main Types
//!
//! - [`Session`] - Owns a [`Document`] and its suggestion overlay
//! - [`EditCommit`] - A transaction plus suggestion metadata, applied atomically
//! - [`SuggestionState`] - The active set and its per-commit reducer
//! - [`DecorationSet`] - Render output for the host to paint
//!
//! # Flow
//!
//! ```text
//! EditCommit ─► Document::apply ─► SuggestionState::apply ─► render / map ─► listeners
//!      ▲                                                                       │
//!      └──────────── resolve_action ◄── ClickTarget ◄── host click ◄───────────┘
//! ```

pub mod commit;
pub mod config;
pub mod document;
/// Text generator seam and suggestion requests.
pub mod generate;
pub mod session;
pub mod suggestion;

pub use commit::{EditCommit, EditOrigin, SuggestionMeta};
pub use config::{ConfigError, SuggestionConfig};
pub use document::{Document, DocumentId, EditError};
pub use generate::{GenerationError, GenerationRequest, SuggestError, TextGenerator, Transformation};
pub use session::{CommitEvent, CommitListener, Session};
pub use suggestion::{
	ActionTag, ClickTarget, DecorationSet, SetChange, Suggestion, SuggestionAction, SuggestionId, SuggestionKind,
	SuggestionState, SuggestionStatus, has_pending_suggestion,
};
