//! Off-screen rendering for design-time previews.

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use spotlight_core::RenderContext;
use tracing::debug;

use crate::source::ResultsSource;
use crate::view::SearchView;

/// Render a single frame of `view` into a `width` x `height` buffer and
/// return it as text, one line per row with trailing blanks trimmed.
///
/// A view built for [`RenderContext::DesignTime`] is switched to the split
/// layout first, since no breakpoint is ever reported off-screen.
pub fn render_preview(
	view: &mut SearchView,
	source: &dyn ResultsSource,
	width: u16,
	height: u16,
) -> Result<String> {
	if view.panel().context() == RenderContext::DesignTime {
		view.panel_mut().prepare_for_design_time_preview();
	}
	view.pump();
	let mut terminal = Terminal::new(TestBackend::new(width, height))?;
	terminal.draw(|frame| view.draw(frame, source))?;
	debug!(width, height, "rendered preview frame");
	Ok(buffer_to_string(terminal.backend().buffer()))
}

pub fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line.trim_end().to_string());
	}
	lines.join("\n")
}

#[cfg(test)]
mod tests {
	use std::time::Instant;

	use ratatui::text::Line;
	use spotlight_core::{ListWidth, PanelConfig, Region};

	use super::*;
	use crate::style::Theme;
	use crate::view::ViewOptions;

	struct Fixed;

	impl ResultsSource for Fixed {
		fn row_count(&self) -> usize {
			2
		}

		fn row(&self, index: usize, _theme: &Theme) -> Line<'static> {
			Line::from(format!("row {index}"))
		}
	}

	fn view(context: RenderContext) -> SearchView {
		let options = ViewOptions {
			panel: PanelConfig {
				bar_height: 2.0,
				context,
				..PanelConfig::default()
			},
			..ViewOptions::default()
		};
		let mut view = SearchView::new(options).unwrap();
		let height = view.height_constraint().clone();
		view.panel_mut().expand(&height, 4.0, false);
		view.tick(Instant::now());
		view
	}

	#[test]
	fn design_time_preview_shows_the_split_layout() {
		let mut view = view(RenderContext::DesignTime);
		let text = render_preview(&mut view, &Fixed, 30, 8).unwrap();
		let lines: Vec<&str> = text.lines().collect();
		assert!(view.panel().is_list_width_active(ListWidth::Split));
		let list = view.panel().frame_of(Region::ResultList).unwrap();
		assert_eq!(list.width, 11.5);
		assert_eq!(lines[1], "─".repeat(30));
		assert!(lines[2].starts_with("row 0"));
		insta::assert_snapshot!(text, @r"
		⌕ Search
		──────────────────────────────
		row 0
		row 1
		");
	}

	#[test]
	fn runtime_preview_keeps_the_compact_layout() {
		let mut view = view(RenderContext::Runtime);
		let text = render_preview(&mut view, &Fixed, 30, 8).unwrap();
		assert!(!text.contains('│'));
		assert!(view.panel().is_list_width_active(ListWidth::Full));
		insta::assert_snapshot!(text, @r"
		⌕ Search
		──────────────────────────────
		row 0
		row 1
		");
	}
}
