//! The terminal host of an [`AdaptiveSearchPanel`].

use std::time::Instant;

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use spotlight_core::{
	AdaptiveSearchPanel, Breakpoint, EndEditingReason, HeightConstraint, LayoutError,
	MainContext, PanelConfig, PanelHandle, Rect as PanelRect, Region, main_context,
};
use tracing::debug;

use crate::canvas::{BufferCanvas, to_cells, to_points};
use crate::components::{
	fade, render_detail, render_layer, render_results, render_search_bar, render_shadow,
};
use crate::field::{FieldEvent, SearchField};
use crate::source::{ResultsSource, ViewContext};
use crate::style::Theme;

/// Identifier of the host height constraint.
pub const HEIGHT_CONSTRAINT_ID: &str = "SearchViewHeight";

/// How a [`SearchView`] session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewOutcome {
	/// Return was accepted; carries the selected row, if any.
	Selected(Option<usize>),
	Cancelled,
}

/// Construction options for a [`SearchView`].
#[derive(Debug, Clone)]
pub struct ViewOptions {
	pub panel: PanelConfig,
	pub theme: Theme,
	pub placeholder: String,
	pub empty_message: String,
	/// Narrowest terminal, in columns, that gets the regular breakpoint.
	pub regular_min_width: u16,
}

impl Default for ViewOptions {
	fn default() -> Self {
		Self {
			panel: PanelConfig {
				bar_height: 2.0,
				..PanelConfig::default()
			},
			theme: Theme::default(),
			placeholder: "Search".to_string(),
			empty_message: "No results".to_string(),
			regular_min_width: 80,
		}
	}
}

/// Owns the panel, its editable text, the result selection and the host
/// height constraint the panel drives.
pub struct SearchView {
	panel: AdaptiveSearchPanel,
	field: SearchField,
	selection: ListState,
	theme: Theme,
	height: HeightConstraint,
	handle: PanelHandle,
	main: MainContext,
	regular_min_width: u16,
	empty_message: String,
}

impl SearchView {
	pub fn new(options: ViewOptions) -> Result<Self, LayoutError> {
		let panel = AdaptiveSearchPanel::new(options.panel)?;
		let height = HeightConstraint::new(HEIGHT_CONSTRAINT_ID, panel.bar_height());
		let field = SearchField::new(panel.search_bar().text(), options.placeholder);
		let (handle, main) = main_context();
		Ok(Self {
			panel,
			field,
			selection: ListState::default(),
			theme: options.theme,
			height,
			handle,
			main,
			regular_min_width: options.regular_min_width,
			empty_message: options.empty_message,
		})
	}

	#[must_use]
	pub fn panel(&self) -> &AdaptiveSearchPanel {
		&self.panel
	}

	pub fn panel_mut(&mut self) -> &mut AdaptiveSearchPanel {
		&mut self.panel
	}

	/// A sender for panel commands, usable from any thread.
	#[must_use]
	pub fn handle(&self) -> PanelHandle {
		self.handle.clone()
	}

	#[must_use]
	pub fn height_constraint(&self) -> &HeightConstraint {
		&self.height
	}

	#[must_use]
	pub fn theme(&self) -> &Theme {
		&self.theme
	}

	#[must_use]
	pub fn selected(&self) -> Option<usize> {
		self.selection.selected()
	}

	#[must_use]
	pub fn text(&self) -> String {
		self.field.text()
	}

	/// Replace the search text, notifying the search bar delegate.
	pub fn set_text(&mut self, text: &str) {
		self.field.set_text(text);
		self.panel.search_bar_mut().text_did_change(text);
	}

	#[must_use]
	pub fn regular_min_width(&self) -> u16 {
		self.regular_min_width
	}

	#[must_use]
	pub fn breakpoint_for(&self, columns: u16) -> Breakpoint {
		Breakpoint::for_width(f64::from(columns), f64::from(self.regular_min_width))
	}

	/// Apply queued panel commands.
	pub fn pump(&mut self) -> usize {
		self.main.pump(&mut self.panel)
	}

	/// Advance a running height transition.
	pub fn tick(&mut self, now: Instant) -> bool {
		self.panel.tick(now)
	}

	pub fn context(&mut self, now: Instant) -> ViewContext<'_> {
		ViewContext {
			panel: &mut self.panel,
			selection: &mut self.selection,
			handle: &self.handle,
			height: &self.height,
			now,
		}
	}

	/// Give `source` its per-frame chance to react.
	pub fn update(&mut self, source: &mut dyn ResultsSource, now: Instant) {
		let mut ctx = self.context(now);
		source.update(&mut ctx);
		let count = source.row_count();
		if self.selection.selected().is_some_and(|row| row >= count) {
			self.selection.select(count.checked_sub(1));
		}
	}

	/// Route a key press. Returns an outcome once the session should end.
	pub fn handle_key(
		&mut self,
		key: KeyEvent,
		source: &mut dyn ResultsSource,
		now: Instant,
	) -> Option<ViewOutcome> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return self.cancel(),
			KeyCode::Char('c') if ctrl => return self.cancel(),
			KeyCode::Enter => {
				let bar = self.panel.search_bar_mut();
				if !bar.should_return() {
					return None;
				}
				if !bar.end_editing(EndEditingReason::Committed) {
					debug!("search bar refused to end editing");
					return None;
				}
				let selected = self
					.selection
					.selected()
					.filter(|row| *row < source.row_count());
				return Some(ViewOutcome::Selected(selected));
			}
			KeyCode::Char('u') if ctrl => {
				if self.panel.search_bar_mut().clear() {
					self.field.set_text("");
				}
			}
			KeyCode::Up => self.move_selection(-1, source, now),
			KeyCode::Down => self.move_selection(1, source, now),
			_ => {
				let bar = self.panel.search_bar_mut();
				if !bar.is_editing() && !bar.begin_editing() {
					debug!("search bar refused to begin editing");
					return None;
				}
				if self.field.handle_key(key, bar) == FieldEvent::Rejected {
					debug!(?key, "edit rejected");
				}
			}
		}
		None
	}

	fn cancel(&mut self) -> Option<ViewOutcome> {
		self.panel
			.search_bar_mut()
			.end_editing(EndEditingReason::Cancelled);
		Some(ViewOutcome::Cancelled)
	}

	fn move_selection(&mut self, delta: isize, source: &mut dyn ResultsSource, now: Instant) {
		let count = source.row_count();
		if count == 0 {
			return;
		}
		let next = match self.selection.selected() {
			Some(row) => row.saturating_add_signed(delta).min(count - 1),
			None => 0,
		};
		if self.selection.selected() == Some(next) {
			return;
		}
		self.selection.select(Some(next));
		let mut ctx = self.context(now);
		source.did_select_row(next, &mut ctx);
	}

	/// Draw the panel at the top of the frame, sized by the host height
	/// constraint.
	pub fn draw(&mut self, frame: &mut Frame, source: &dyn ResultsSource) {
		let screen = frame.area();
		let appearance = self.panel.appearance().clone();
		let inset = u16::from(appearance.has_border());
		let available = Rect {
			x: screen.x.saturating_add(inset),
			y: screen.y.saturating_add(inset),
			width: screen.width.saturating_sub(inset * 2),
			height: screen.height.saturating_sub(inset * 2),
		};
		if available.is_empty() {
			return;
		}
		let wanted = self.height.constant().round().clamp(0.0, f64::from(u16::MAX)) as u16;
		let panel_area = Rect {
			height: wanted.min(available.height),
			..available
		};
		self.panel.set_frame(PanelRect::new(
			0.0,
			0.0,
			f64::from(panel_area.width),
			f64::from(panel_area.height),
		));

		let outer = Rect {
			x: panel_area.x - inset,
			y: panel_area.y - inset,
			width: panel_area.width + inset * 2,
			height: panel_area.height + inset * 2,
		};
		render_shadow(frame, outer, &appearance);
		render_layer(frame, outer, &appearance);
		let clip = if appearance.mask_to_bounds {
			panel_area
		} else {
			screen
		};

		let region = |panel: &AdaptiveSearchPanel, which: Region| {
			panel
				.frame_of(which)
				.map(|rect| to_cells(rect, panel_area, clip))
				.unwrap_or_default()
		};

		let bar_area = region(&self.panel, Region::SearchBar);
		let bar_content = Rect {
			height: if bar_area.height > 1 {
				bar_area.height - 1
			} else {
				bar_area.height
			},
			..bar_area
		};
		render_search_bar(
			frame,
			bar_content,
			self.panel.search_bar(),
			&mut self.field,
			&self.theme,
		);

		let opacity = self.panel.results_opacity();
		if opacity > 0.0 {
			let container = region(&self.panel, Region::ResultContainer);
			let list = region(&self.panel, Region::ResultList);
			render_results(
				frame,
				list,
				source,
				&mut self.selection,
				&self.theme,
				&self.empty_message,
			);
			if self.panel.detail_visible() {
				let detail = region(&self.panel, Region::DetailPane);
				render_detail(frame, detail, source, self.selection.selected(), &self.theme);
			}
			fade(frame.buffer_mut(), container, opacity, &self.theme);
		}

		let mut canvas = BufferCanvas::new(frame.buffer_mut()).clipped(clip);
		self.panel.redraw(to_points(panel_area), &mut canvas);
	}
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;
	use ratatui::buffer::Buffer;
	use ratatui::text::Line;
	use spotlight_core::{LayerAppearance, ListWidth, SearchBarDelegate};

	use super::*;
	use crate::components::{HIGHLIGHT_SYMBOL, SEARCH_ICON};
	use crate::preview::buffer_to_string;

	struct Names {
		rows: Vec<&'static str>,
		selected: Vec<usize>,
	}

	impl Names {
		fn new(rows: &[&'static str]) -> Self {
			Self {
				rows: rows.to_vec(),
				selected: Vec::new(),
			}
		}
	}

	impl ResultsSource for Names {
		fn row_count(&self) -> usize {
			self.rows.len()
		}

		fn row(&self, index: usize, _theme: &Theme) -> Line<'static> {
			Line::from(self.rows[index])
		}

		fn did_select_row(&mut self, index: usize, ctx: &mut ViewContext<'_>) {
			self.selected.push(index);
			ctx.set_result_type_image(Some("@".to_string()));
		}

		fn render_detail(&self, selected: Option<usize>, frame: &mut Frame, area: Rect, _theme: &Theme) {
			let text = selected.map_or("nothing", |row| self.rows[row]);
			frame.render_widget(Line::from(format!("detail:{text}")), area);
		}
	}

	/// Refuses to stop editing.
	struct Sticky;

	impl SearchBarDelegate for Sticky {
		fn should_end_editing(&mut self, _text: &str) -> bool {
			false
		}
	}

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	fn lines(buffer: &Buffer) -> Vec<String> {
		(0..buffer.area.height)
			.map(|y| (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect())
			.collect()
	}

	fn bordered_options() -> ViewOptions {
		let mut options = ViewOptions::default();
		options.panel.appearance = LayerAppearance {
			border_width: 1.0,
			corner_radius: 8.0,
			..LayerAppearance::default()
		};
		options
	}

	fn expanded_view(breakpoint: Breakpoint) -> SearchView {
		let mut view = SearchView::new(ViewOptions::default()).unwrap();
		let now = Instant::now();
		let handle = view.handle();
		handle.breakpoint_changed(breakpoint);
		handle.expand(view.height_constraint().clone(), 6.0, false);
		assert_eq!(view.pump(), 2);
		view.tick(now);
		view
	}

	/// Draw one frame; returns the raw rows and the trimmed snapshot text.
	fn render(view: &mut SearchView, source: &Names, width: u16, height: u16) -> (Vec<String>, String) {
		let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
		terminal.draw(|frame| view.draw(frame, source)).unwrap();
		let buffer = terminal.backend().buffer();
		(lines(buffer), buffer_to_string(buffer))
	}

	#[test]
	fn regular_layout_draws_both_dividers_and_the_detail_pane() {
		let mut view = expanded_view(Breakpoint::Regular);
		let mut source = Names::new(&["Jack Depp", "Jack DiCaprio"]);
		view.handle_key(key(KeyCode::Down), &mut source, Instant::now());
		assert_eq!(source.selected, vec![0]);

		let (screen, text) = render(&mut view, &source, 40, 10);
		// Split list width is 0.4 * 40 - 0.5 = 15.5; the divider sits at 16.25.
		assert_eq!(screen[1], format!("{}┬{}", "─".repeat(16), "─".repeat(23)));
		for row in &screen[2..8] {
			assert_eq!(row.chars().nth(16), Some('│'), "{row}");
		}
		assert!(screen[2].starts_with(HIGHLIGHT_SYMBOL));
		assert!(screen[2].contains("detail:Jack Depp"));
		assert!(screen[8].trim().is_empty());
		assert!(screen[0].starts_with(SEARCH_ICON));
		insta::assert_snapshot!(text, @r"
		⌕ Search                              @
		────────────────┬───────────────────────
		▶ Jack Depp     │ detail:Jack Depp
		  Jack DiCaprio │
		                │
		                │
		                │
		                │
		");
	}

	#[test]
	fn compact_layout_hides_the_detail_pane() {
		let mut view = expanded_view(Breakpoint::Compact);
		let source = Names::new(&["Joe Daniels"]);
		let (screen, text) = render(&mut view, &source, 40, 10);
		assert!(screen.iter().all(|row| !row.contains('│')));
		assert!(screen.iter().all(|row| !row.contains("detail:")));
		assert!(view.panel().is_list_width_active(ListWidth::Full));
		insta::assert_snapshot!(text, @r"
		⌕ Search
		────────────────────────────────────────
		Joe Daniels
		");
	}

	#[test]
	fn collapsed_panel_shows_only_the_bar() {
		let mut view = SearchView::new(ViewOptions::default()).unwrap();
		let source = Names::new(&["Jack Depp"]);
		let (screen, text) = render(&mut view, &source, 30, 6);
		assert!(screen[1..].iter().all(|row| row.trim().is_empty()));
		insta::assert_snapshot!(text, @r"
		⌕ Search
		");
	}

	#[test]
	fn empty_results_show_a_message() {
		let mut view = expanded_view(Breakpoint::Compact);
		let source = Names::new(&[]);
		let (screen, text) = render(&mut view, &source, 30, 10);
		assert_eq!(screen[2].trim(), "No results");
		insta::assert_snapshot!(text, @r"
		⌕ Search
		──────────────────────────────
		          No results
		");
	}

	#[test]
	fn border_wraps_the_panel() {
		let mut view = SearchView::new(bordered_options()).unwrap();
		let (screen, text) = render(&mut view, &Names::new(&[]), 20, 6);
		assert!(screen[0].starts_with('╭'));
		assert!(screen[3].starts_with('╰'));
		assert_eq!(view.panel().frame().width, 18.0);
		insta::assert_snapshot!(text, @r"
		╭──────────────────╮
		│⌕ Search          │
		│                  │
		╰──────────────────╯
		");
	}

	#[test]
	fn search_bar_draws_its_own_border() {
		let mut options = ViewOptions::default();
		options.panel.bar_height = 4.0;
		options.panel.search_bar.layer.border_width = 1.0;
		let mut view = SearchView::new(options).unwrap();
		let (screen, _) = render(&mut view, &Names::new(&[]), 20, 6);
		assert!(screen[0].starts_with('┌'));
		assert!(screen[1].starts_with(&format!("│{SEARCH_ICON}")));
		assert!(screen[2].starts_with('└'));
	}

	#[test]
	fn border_leaves_no_room_on_a_tiny_terminal() {
		for (width, height) in [(20, 1), (1, 10), (2, 2)] {
			let mut view = SearchView::new(bordered_options()).unwrap();
			let (_, text) = render(&mut view, &Names::new(&["Jack Depp"]), width, height);
			assert!(text.trim().is_empty(), "{width}x{height}: {text}");
		}
	}

	#[test]
	fn typing_reaches_the_search_bar_and_escape_cancels() {
		let mut view = SearchView::new(ViewOptions::default()).unwrap();
		let mut source = Names::new(&[]);
		let now = Instant::now();
		for c in "jo".chars() {
			assert_eq!(view.handle_key(key(KeyCode::Char(c)), &mut source, now), None);
		}
		assert!(view.panel().search_bar().is_editing());
		assert_eq!(view.panel().search_bar().text(), "jo");

		let clear = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
		view.handle_key(clear, &mut source, now);
		assert_eq!(view.text(), "");

		assert_eq!(
			view.handle_key(key(KeyCode::Esc), &mut source, now),
			Some(ViewOutcome::Cancelled)
		);
		assert!(!view.panel().search_bar().is_editing());
	}

	#[test]
	fn enter_returns_the_selected_row() {
		let mut view = expanded_view(Breakpoint::Regular);
		let mut source = Names::new(&["a", "b", "c"]);
		let now = Instant::now();
		view.handle_key(key(KeyCode::Down), &mut source, now);
		view.handle_key(key(KeyCode::Down), &mut source, now);
		view.handle_key(key(KeyCode::Down), &mut source, now);
		view.handle_key(key(KeyCode::Down), &mut source, now);
		assert_eq!(source.selected, vec![0, 1, 2]);
		view.handle_key(key(KeyCode::Up), &mut source, now);
		assert_eq!(
			view.handle_key(key(KeyCode::Enter), &mut source, now),
			Some(ViewOutcome::Selected(Some(1)))
		);
	}

	#[test]
	fn enter_is_ignored_while_the_delegate_keeps_editing() {
		let mut view = SearchView::new(ViewOptions::default()).unwrap();
		view.panel_mut().search_bar_mut().set_delegate(Box::new(Sticky));
		let mut source = Names::new(&["a"]);
		let now = Instant::now();
		view.handle_key(key(KeyCode::Char('a')), &mut source, now);
		assert!(view.panel().search_bar().is_editing());

		assert_eq!(view.handle_key(key(KeyCode::Enter), &mut source, now), None);
		assert!(view.panel().search_bar().is_editing());
	}

	#[test]
	fn terminal_width_maps_to_breakpoints() {
		let view = SearchView::new(ViewOptions::default()).unwrap();
		assert_eq!(view.breakpoint_for(79), Breakpoint::Compact);
		assert_eq!(view.breakpoint_for(80), Breakpoint::Regular);
	}
}
