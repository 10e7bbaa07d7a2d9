//! Presentation settings for suggestion decorations.
//!
//! Configuration is plain TOML. Every key is optional:
//!
//! ```toml
//! remove_style = "suggestion-remove"
//! insert_style = "suggestion-insert"
//! controls_style = "suggestion-controls"
//! accept_label = "Accept"
//! reject_label = "Reject"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::suggestion::SuggestionAction;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A style tag or label was set to an empty string.
	#[error("config field must not be empty: {0}")]
	EmptyField(&'static str),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Style tags and control labels handed to the host with each decoration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SuggestionConfig {
	/// Style tag for the strike-out marker over the original text.
	pub remove_style: String,
	/// Style tag for the inserted-text widget.
	pub insert_style: String,
	/// Style tag for the controls widget.
	pub controls_style: String,
	pub accept_label: String,
	pub reject_label: String,
}

impl Default for SuggestionConfig {
	fn default() -> Self {
		Self {
			remove_style: "suggestion-remove".to_string(),
			insert_style: "suggestion-insert".to_string(),
			controls_style: "suggestion-controls".to_string(),
			accept_label: "Accept".to_string(),
			reject_label: "Reject".to_string(),
		}
	}
}

impl SuggestionConfig {
	/// Parses and validates a TOML document.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads, parses and validates a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::from_toml_str(&input)?;
		tracing::debug!(path = %path.display(), "Loaded suggestion config");
		Ok(config)
	}

	/// Rejects empty style tags and labels.
	pub fn validate(&self) -> Result<()> {
		let fields = [
			("remove_style", &self.remove_style),
			("insert_style", &self.insert_style),
			("controls_style", &self.controls_style),
			("accept_label", &self.accept_label),
			("reject_label", &self.reject_label),
		];
		match fields.into_iter().find(|(_, value)| value.trim().is_empty()) {
			Some((name, _)) => Err(ConfigError::EmptyField(name)),
			None => Ok(()),
		}
	}

	/// Label shown on the control for `action`.
	pub fn label_for(&self, action: SuggestionAction) -> &str {
		match action {
			SuggestionAction::Accept => &self.accept_label,
			SuggestionAction::Reject => &self.reject_label,
		}
	}
}
