//! Producing suggestions from an external text generator.
//!
//! The generator itself lives outside this crate; [`TextGenerator`] is the
//! seam. [`Session::request_suggestion`](crate::Session::request_suggestion)
//! drives it and turns the answer into a pending suggestion.

use async_trait::async_trait;
use redline_primitives::CharIdx;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::EditError;
use crate::suggestion::SuggestionKind;

/// The rewrite a caller asks for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Transformation {
	Improve,
	Shorten,
	Expand,
	Fix,
	/// Free-form instruction passed through to the generator.
	Custom(String),
}

impl Transformation {
	/// Category given to suggestions produced by this transformation.
	pub fn default_kind(&self) -> SuggestionKind {
		match self {
			Self::Improve => SuggestionKind::Clarity,
			Self::Shorten => SuggestionKind::Conciseness,
			Self::Fix => SuggestionKind::Grammar,
			Self::Expand | Self::Custom(_) => SuggestionKind::Style,
		}
	}

	/// Instruction text sent alongside the selected passage.
	pub fn instruction(&self) -> &str {
		match self {
			Self::Improve => "Improve the writing quality of this text while keeping its meaning.",
			Self::Shorten => "Make this text more concise without losing key information.",
			Self::Expand => "Expand this text with more detail.",
			Self::Fix => "Fix spelling and grammar errors in this text.",
			Self::Custom(instruction) => instruction,
		}
	}
}

/// One call into a [`TextGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
	/// The selected passage, verbatim.
	pub text: String,
	pub transformation: Transformation,
}

/// Failure reported by a [`TextGenerator`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
	#[error("generation failed: {0}")]
	Failed(String),
	#[error("generator returned no text")]
	Empty,
}

/// Why a suggestion request produced nothing.
#[derive(Debug, Error)]
pub enum SuggestError {
	#[error("selection is empty")]
	EmptySelection,
	#[error("selection {from}..{to} exceeds document length {len}")]
	OutOfBounds { from: CharIdx, to: CharIdx, len: usize },
	/// The generator echoed the selection back unchanged.
	#[error("generator proposed no change")]
	NoChange,
	#[error(transparent)]
	Generation(#[from] GenerationError),
	#[error(transparent)]
	Edit(#[from] EditError),
}

/// Source of rewritten text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
	async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}
