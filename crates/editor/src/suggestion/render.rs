//! Decoration descriptors for pending suggestions.
//!
//! Rendering here means producing data. Each pending suggestion yields a
//! strike-out marker over its span, a widget showing the replacement text, and
//! a widget holding the accept/reject controls. The host decides what any of
//! that looks like.

use redline_primitives::{Bias, ChangeSet, CharIdx, RopeSlice, Span, max_cursor_pos};

use super::types::{ActionTag, Suggestion, SuggestionAction, SuggestionId};
use crate::config::SuggestionConfig;

/// Data attribute carrying the suggestion id on a control.
pub const ATTR_SUGGESTION_ID: &str = "data-suggestion-id";
/// Data attribute carrying the action name on a control.
pub const ATTR_ACTION: &str = "data-action";

/// A styled span over existing text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineDecoration {
	pub range: Span,
	pub style_tag: String,
	pub suggestion_id: SuggestionId,
	/// Index of the owning suggestion among the rendered ones. Breaks ties
	/// between decorations at the same position.
	pub order: usize,
}

/// One interactive control inside a controls widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
	pub tag: ActionTag,
	pub label: String,
}

impl ActionButton {
	/// Data attributes the host should put on the rendered control, so the
	/// delegated click handler can rebuild the tag.
	pub fn attrs(&self) -> [(&'static str, &str); 2] {
		[(ATTR_SUGGESTION_ID, self.tag.suggestion_id.as_str()), (ATTR_ACTION, self.tag.action.as_ref())]
	}
}

/// Opaque content of a zero-width widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetPayload {
	/// The proposed replacement text.
	SuggestedText {
		suggestion_id: SuggestionId,
		text: String,
		style_tag: String,
	},
	/// Accept and reject controls, in that order.
	Controls {
		suggestion_id: SuggestionId,
		style_tag: String,
		buttons: [ActionButton; 2],
	},
}

impl WidgetPayload {
	pub fn suggestion_id(&self) -> &SuggestionId {
		match self {
			Self::SuggestedText { suggestion_id, .. } | Self::Controls { suggestion_id, .. } => suggestion_id,
		}
	}
}

/// A zero-width widget anchored at a document position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetDecoration {
	pub position: CharIdx,
	pub payload: WidgetPayload,
	/// Index of the owning suggestion among the rendered ones.
	pub order: usize,
}

/// Every decoration for the current suggestion set, sorted by position.
///
/// Decorations at the same position follow suggestion insertion order, and a
/// suggestion's text widget precedes its controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecorationSet {
	inline: Vec<InlineDecoration>,
	widgets: Vec<WidgetDecoration>,
}

impl DecorationSet {
	pub fn empty() -> Self {
		Self::default()
	}

	pub fn inline(&self) -> &[InlineDecoration] {
		&self.inline
	}

	pub fn widgets(&self) -> &[WidgetDecoration] {
		&self.widgets
	}

	pub fn is_empty(&self) -> bool {
		self.inline.is_empty() && self.widgets.is_empty()
	}

	/// Ids of every suggestion with at least one decoration, in first-seen order.
	pub fn suggestion_ids(&self) -> Vec<&SuggestionId> {
		let mut ids: Vec<&SuggestionId> = Vec::new();
		for id in self.inline.iter().map(|d| &d.suggestion_id).chain(self.widgets.iter().map(|w| w.payload.suggestion_id())) {
			if !ids.contains(&id) {
				ids.push(id);
			}
		}
		ids
	}

	/// Repositions every decoration through `changes` without rebuilding payloads.
	pub fn map(&mut self, changes: &ChangeSet) {
		if changes.is_identity() {
			return;
		}
		for deco in &mut self.inline {
			let from = changes.map_pos(deco.range.from, Bias::Left);
			let to = changes.map_pos(deco.range.to, Bias::Right);
			deco.range = Span { from, to: to.max(from) };
		}
		for widget in &mut self.widgets {
			widget.position = changes.map_pos(widget.position, Bias::Right);
		}
		self.sort();
	}

	fn sort(&mut self) {
		self.inline.sort_by_key(|d| (d.range.from, d.range.to, d.order));
		self.widgets.sort_by_key(|w| (w.position, w.order));
	}
}

/// Builds decorations for every pending suggestion in `suggestions`.
///
/// Non-pending entries are skipped. Spans are clamped to `doc`.
pub fn render(doc: RopeSlice, suggestions: &[Suggestion], config: &SuggestionConfig) -> DecorationSet {
	let len = max_cursor_pos(doc);
	let mut inline = Vec::new();
	let mut widgets = Vec::new();

	for (order, suggestion) in suggestions.iter().filter(|s| s.is_pending()).enumerate() {
		let range = suggestion.range.clamp(len);
		let id = &suggestion.id;

		inline.push(InlineDecoration {
			range,
			style_tag: config.remove_style.clone(),
			suggestion_id: id.clone(),
			order,
		});
		widgets.push(WidgetDecoration {
			position: range.to,
			payload: WidgetPayload::SuggestedText {
				suggestion_id: id.clone(),
				text: suggestion.suggested_text.clone(),
				style_tag: config.insert_style.clone(),
			},
			order,
		});
		widgets.push(WidgetDecoration {
			position: range.to,
			payload: WidgetPayload::Controls {
				suggestion_id: id.clone(),
				style_tag: config.controls_style.clone(),
				buttons: [
					button(id, SuggestionAction::Accept, config),
					button(id, SuggestionAction::Reject, config),
				],
			},
			order,
		});
	}

	let mut set = DecorationSet { inline, widgets };
	set.sort();
	set
}

fn button(id: &SuggestionId, action: SuggestionAction, config: &SuggestionConfig) -> ActionButton {
	ActionButton {
		tag: ActionTag::new(id.clone(), action),
		label: config.label_for(action).to_string(),
	}
}
