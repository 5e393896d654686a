//! The seam between the view and whatever supplies its results.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::ListState;
use spotlight_core::{AdaptiveSearchPanel, HeightConstraint, PanelHandle};

use crate::style::Theme;

/// Mutable state a [`ResultsSource`] may touch while reacting to the view.
pub struct ViewContext<'v> {
	pub panel: &'v mut AdaptiveSearchPanel,
	pub selection: &'v mut ListState,
	pub handle: &'v PanelHandle,
	pub height: &'v HeightConstraint,
	pub now: Instant,
}

impl ViewContext<'_> {
	/// Current search text.
	#[must_use]
	pub fn query(&self) -> &str {
		self.panel.search_bar().text()
	}

	/// Queue an expansion of the host height by `by` past the bar.
	pub fn expand(&self, by: f64, animated: bool) -> bool {
		self.handle.expand(self.height.clone(), by, animated)
	}

	pub fn select(&mut self, row: Option<usize>) {
		self.selection.select(row);
	}

	pub fn set_result_type_image(&mut self, image: Option<String>) {
		self.panel.search_bar_mut().set_result_type_image(image);
	}
}

/// Supplies rows and detail content to a [`SearchView`](crate::SearchView).
pub trait ResultsSource {
	/// Called once per frame before input is handled.
	fn update(&mut self, _ctx: &mut ViewContext<'_>) {}

	fn row_count(&self) -> usize;

	fn row(&self, index: usize, theme: &Theme) -> Line<'static>;

	/// Called after the selection moved to `index`.
	fn did_select_row(&mut self, _index: usize, _ctx: &mut ViewContext<'_>) {}

	/// Draw the detail pane for `selected` into `area`.
	fn render_detail(&self, _selected: Option<usize>, _frame: &mut Frame, _area: Rect, _theme: &Theme) {}
}
