use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::{HighlightSpacing, List, ListItem, ListState, Paragraph};

use crate::source::ResultsSource;
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// Render the result list, or `empty_message` when there are no rows.
pub(crate) fn render_results(
	frame: &mut Frame,
	area: Rect,
	source: &dyn ResultsSource,
	selection: &mut ListState,
	theme: &Theme,
	empty_message: &str,
) {
	if area.is_empty() {
		return;
	}
	let count = source.row_count();
	if count == 0 {
		let message = Paragraph::new(empty_message)
			.style(theme.empty)
			.alignment(Alignment::Center);
		frame.render_widget(message, Rect { height: 1, ..area });
		return;
	}

	let items: Vec<ListItem> = (0..count)
		.map(|index| ListItem::new(source.row(index, theme)))
		.collect();
	let list = List::new(items)
		.highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL)
		.highlight_spacing(HighlightSpacing::WhenSelected);
	frame.render_stateful_widget(list, area, selection);
}

/// Render the detail pane, leaving its first column to the vertical divider.
pub(crate) fn render_detail(
	frame: &mut Frame,
	area: Rect,
	source: &dyn ResultsSource,
	selected: Option<usize>,
	theme: &Theme,
) {
	let inner = Rect {
		x: area.x.saturating_add(2),
		width: area.width.saturating_sub(2),
		..area
	};
	if inner.is_empty() {
		return;
	}
	source.render_detail(selected, frame, inner, theme);
}
