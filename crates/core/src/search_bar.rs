//! Search bar model and the delegate it forwards editing events to.

use std::fmt;
use std::ops::Range;

use crate::appearance::SearchBarAppearance;

/// Why editing ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndEditingReason {
	/// The user confirmed the input.
	Committed,
	/// Editing was abandoned.
	Cancelled,
}

/// A proposed edit: replace the characters in `range` (char offsets) with
/// `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChange {
	pub range: Range<usize>,
	pub replacement: String,
}

impl TextChange {
	#[must_use]
	pub fn insert(at: usize, replacement: impl Into<String>) -> Self {
		Self {
			range: at..at,
			replacement: replacement.into(),
		}
	}

	#[must_use]
	pub fn delete(range: Range<usize>) -> Self {
		Self {
			range,
			replacement: String::new(),
		}
	}

	/// Apply the change to `text`, clamping the range to its length.
	#[must_use]
	pub fn apply(&self, text: &str) -> String {
		let len = text.chars().count();
		let start = self.range.start.min(len);
		let end = self.range.end.clamp(start, len);
		let mut out: String = text.chars().take(start).collect();
		out.push_str(&self.replacement);
		out.extend(text.chars().skip(end));
		out
	}
}

/// Receiver of search bar events. Every method is optional: should-queries
/// default to `true` and notifications to no-ops.
pub trait SearchBarDelegate {
	fn should_begin_editing(&mut self, _text: &str) -> bool {
		true
	}

	fn did_begin_editing(&mut self, _text: &str) {}

	fn should_end_editing(&mut self, _text: &str) -> bool {
		true
	}

	fn did_end_editing(&mut self, _text: &str) {}

	/// Defaults to [`did_end_editing`](Self::did_end_editing).
	fn did_end_editing_with_reason(&mut self, text: &str, _reason: EndEditingReason) {
		self.did_end_editing(text);
	}

	fn should_change_characters(&mut self, _text: &str, _change: &TextChange) -> bool {
		true
	}

	fn did_change_text(&mut self, _text: &str) {}

	fn should_clear(&mut self, _text: &str) -> bool {
		true
	}

	fn should_return(&mut self, _text: &str) -> bool {
		true
	}
}

/// Text, styling and delegate of the panel's search bar.
#[derive(Default)]
pub struct SearchBar {
	appearance: SearchBarAppearance,
	text: String,
	result_type_image: Option<String>,
	editing: bool,
	delegate: Option<Box<dyn SearchBarDelegate>>,
}

impl fmt::Debug for SearchBar {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SearchBar")
			.field("appearance", &self.appearance)
			.field("text", &self.text)
			.field("result_type_image", &self.result_type_image)
			.field("editing", &self.editing)
			.field("delegate", &self.delegate.is_some())
			.finish()
	}
}

impl SearchBar {
	#[must_use]
	pub fn new(appearance: SearchBarAppearance) -> Self {
		Self {
			appearance,
			..Self::default()
		}
	}

	#[must_use]
	pub fn appearance(&self) -> &SearchBarAppearance {
		&self.appearance
	}

	pub fn appearance_mut(&mut self) -> &mut SearchBarAppearance {
		&mut self.appearance
	}

	#[must_use]
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Replace the text without notifying the delegate.
	pub fn set_text(&mut self, text: impl Into<String>) {
		self.text = text.into();
	}

	/// Glyph describing the kind of the selected result, drawn at the
	/// trailing edge of the bar.
	#[must_use]
	pub fn result_type_image(&self) -> Option<&str> {
		self.result_type_image.as_deref()
	}

	pub fn set_result_type_image(&mut self, image: Option<String>) {
		self.result_type_image = image;
	}

	#[must_use]
	pub fn is_editing(&self) -> bool {
		self.editing
	}

	pub fn set_delegate(&mut self, delegate: Box<dyn SearchBarDelegate>) {
		self.delegate = Some(delegate);
	}

	pub fn take_delegate(&mut self) -> Option<Box<dyn SearchBarDelegate>> {
		self.delegate.take()
	}

	/// Start editing if the delegate allows it.
	pub fn begin_editing(&mut self) -> bool {
		if self.editing {
			return true;
		}
		if !self.ask(|delegate, text| delegate.should_begin_editing(text)) {
			return false;
		}
		self.editing = true;
		self.notify(|delegate, text| delegate.did_begin_editing(text));
		true
	}

	/// Stop editing if the delegate allows it.
	pub fn end_editing(&mut self, reason: EndEditingReason) -> bool {
		if !self.editing {
			return true;
		}
		if !self.ask(|delegate, text| delegate.should_end_editing(text)) {
			return false;
		}
		self.editing = false;
		self.notify(|delegate, text| delegate.did_end_editing_with_reason(text, reason));
		true
	}

	pub fn should_change_characters(&mut self, change: &TextChange) -> bool {
		self.ask(|delegate, text| delegate.should_change_characters(text, change))
	}

	/// Store edited text and notify the delegate when it differs.
	pub fn text_did_change(&mut self, text: impl Into<String>) {
		let text = text.into();
		if text == self.text {
			return;
		}
		self.text = text;
		self.notify(|delegate, text| delegate.did_change_text(text));
	}

	/// Clear the text if the delegate allows it. Returns whether it cleared.
	pub fn clear(&mut self) -> bool {
		if !self.ask(|delegate, text| delegate.should_clear(text)) {
			return false;
		}
		self.text_did_change(String::new());
		true
	}

	pub fn should_return(&mut self) -> bool {
		self.ask(|delegate, text| delegate.should_return(text))
	}

	fn ask(&mut self, query: impl FnOnce(&mut dyn SearchBarDelegate, &str) -> bool) -> bool {
		match self.delegate.as_deref_mut() {
			Some(delegate) => query(delegate, &self.text),
			None => true,
		}
	}

	fn notify(&mut self, event: impl FnOnce(&mut dyn SearchBarDelegate, &str)) {
		if let Some(delegate) = self.delegate.as_deref_mut() {
			event(delegate, &self.text);
		}
	}
}
