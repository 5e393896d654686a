//! Single-line search input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use spotlight_core::{SearchBar, TextChange};
use tracing::trace;
use tui_textarea::{CursorMove, TextArea};

/// What a key press did to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
	/// The text changed and the search bar was notified.
	Edited,
	/// The delegate refused the change.
	Rejected,
	/// Only the cursor moved.
	Moved,
	/// The key has no meaning for a single-line field.
	Ignored,
}

/// Editable text of the search bar.
///
/// Every edit is first applied to a scratch copy so the exact replaced range
/// can be offered to the search bar delegate before it is committed.
#[derive(Debug, Clone)]
pub struct SearchField {
	textarea: TextArea<'static>,
	placeholder: String,
}

impl SearchField {
	#[must_use]
	pub fn new(text: &str, placeholder: impl Into<String>) -> Self {
		let placeholder = placeholder.into();
		Self {
			textarea: build_textarea(text, &placeholder),
			placeholder,
		}
	}

	#[must_use]
	pub fn text(&self) -> String {
		self.textarea.lines().first().cloned().unwrap_or_default()
	}

	/// Cursor position in characters.
	#[must_use]
	pub fn cursor(&self) -> usize {
		self.textarea.cursor().1
	}

	/// Replace the text without consulting anyone.
	pub fn set_text(&mut self, text: &str) {
		self.textarea = build_textarea(text, &self.placeholder);
	}

	/// Apply `key` if the search bar's delegate agrees.
	pub fn handle_key(&mut self, key: KeyEvent, bar: &mut SearchBar) -> FieldEvent {
		let before = self.text();
		let cursor = self.textarea.cursor();
		let mut scratch = self.textarea.clone();
		scratch.input(key);
		if scratch.lines().len() != 1 {
			return FieldEvent::Ignored;
		}

		let after = scratch.lines().first().cloned().unwrap_or_default();
		if after == before {
			if scratch.cursor() == cursor {
				return FieldEvent::Ignored;
			}
			self.textarea = scratch;
			return FieldEvent::Moved;
		}

		let change = diff(&before, &after);
		if !bar.should_change_characters(&change) {
			trace!(?change, "search bar delegate rejected edit");
			return FieldEvent::Rejected;
		}
		self.textarea = scratch;
		bar.text_did_change(after);
		FieldEvent::Edited
	}

	pub fn render(&mut self, frame: &mut Frame, area: Rect, text: Style, placeholder: Style) {
		self.textarea.set_style(text);
		self.textarea.set_placeholder_style(placeholder);
		self.textarea
			.set_cursor_style(text.add_modifier(Modifier::REVERSED));
		frame.render_widget(&self.textarea, area);
	}
}

fn build_textarea(text: &str, placeholder: &str) -> TextArea<'static> {
	let mut textarea = TextArea::new(vec![text.to_string()]);
	textarea.set_cursor_line_style(Style::default());
	textarea.set_placeholder_text(placeholder);
	textarea.move_cursor(CursorMove::End);
	textarea
}

/// Smallest single-range edit turning `before` into `after`.
fn diff(before: &str, after: &str) -> TextChange {
	let old: Vec<char> = before.chars().collect();
	let new: Vec<char> = after.chars().collect();
	let prefix = old.iter().zip(&new).take_while(|(a, b)| a == b).count();
	let suffix = old[prefix..]
		.iter()
		.rev()
		.zip(new[prefix..].iter().rev())
		.take_while(|(a, b)| a == b)
		.count();
	TextChange {
		range: prefix..old.len() - suffix,
		replacement: new[prefix..new.len() - suffix].iter().collect(),
	}
}
