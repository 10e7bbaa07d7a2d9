//! Suggestion overlays: proposed edits laid over a live document.
//!
//! The pieces, leaves first:
//!
//! - [`mapping`]: moves spans through a transaction.
//! - [`store`]: the lifecycle reducer, run on every commit.
//! - [`render`]: decoration descriptors for the host to paint.
//! - [`dispatch`]: accept/reject clicks to commits.
//! - [`gate`]: the "anything pending?" predicate.
//!
//! [`Session`](crate::Session) wires them together.

pub mod dispatch;
pub mod gate;
pub mod mapping;
pub mod render;
pub mod store;
mod types;

#[cfg(test)]
mod invariants;

pub use dispatch::{ClickTarget, Resolution, resolve_action};
pub use gate::{has_pending_suggestion, pending_count};
pub use mapping::{MappedSpan, map_span};
pub use render::{ActionButton, DecorationSet, InlineDecoration, WidgetDecoration, WidgetPayload, render};
pub use store::{ApplyOutcome, SetChange, SuggestionState};
pub use types::{ActionTag, Suggestion, SuggestionAction, SuggestionId, SuggestionKind, SuggestionStatus};
