//! Glue between the mock records and the search view.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use spotlight_core::{Debouncer, SearchBarDelegate};
use spotlight_tui::{ResultsSource, SearchView, Theme, ViewContext};
use tracing::debug;

use super::records::{Record, search};

/// Delay between the last keystroke and the search it triggers.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(100);

/// Search bar delegate that hands every text change to the controller.
struct QueryForwarder {
	tx: Sender<String>,
}

impl SearchBarDelegate for QueryForwarder {
	fn did_change_text(&mut self, text: &str) {
		let _ = self.tx.send(text.to_string());
	}
}

/// Runs debounced searches over `records` and drives the panel with the
/// outcome.
pub struct DemoController {
	records: Vec<Record>,
	results: Vec<Record>,
	query: String,
	queries: Receiver<String>,
	debouncer: Debouncer,
	expand_by: f64,
}

impl DemoController {
	/// Build a controller and install its delegate on `view`'s search bar.
	pub fn attach(view: &mut SearchView, records: Vec<Record>, expand_by: f64, delay: Duration) -> Self {
		let (tx, queries) = mpsc::channel();
		view.panel_mut()
			.search_bar_mut()
			.set_delegate(Box::new(QueryForwarder { tx }));
		Self {
			records,
			results: Vec::new(),
			query: String::new(),
			queries,
			debouncer: Debouncer::new(delay),
			expand_by,
		}
	}

	#[must_use]
	pub fn results(&self) -> &[Record] {
		&self.results
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn record(&self, row: Option<usize>) -> Option<&Record> {
		row.and_then(|row| self.results.get(row))
	}

	#[must_use]
	pub fn is_search_pending(&self) -> bool {
		self.debouncer.is_pending()
	}

	/// Search for `query` immediately, skipping the debounce.
	pub fn search_now(&mut self, query: &str, ctx: &mut ViewContext<'_>) {
		self.debouncer.cancel();
		self.query = query.to_string();
		self.results = search(&self.records, query);
		self.present(ctx);
	}

	/// List every record regardless of the query.
	pub fn show_all(&mut self, ctx: &mut ViewContext<'_>) {
		self.debouncer.cancel();
		self.query.clear();
		self.results = self.records.clone();
		self.present(ctx);
	}

	fn present(&mut self, ctx: &mut ViewContext<'_>) {
		debug!(query = %self.query, results = self.results.len(), "search finished");
		if self.results.is_empty() {
			ctx.expand(0.0, true);
			ctx.select(None);
			ctx.set_result_type_image(None);
			return;
		}
		ctx.expand(self.expand_by, false);
		ctx.select(Some(0));
		self.show_detail(0, ctx);
	}

	fn show_detail(&self, row: usize, ctx: &mut ViewContext<'_>) {
		let glyph = self.results.get(row).map(|record| record.type_glyph().to_string());
		ctx.set_result_type_image(glyph);
	}
}

impl ResultsSource for DemoController {
	fn update(&mut self, ctx: &mut ViewContext<'_>) {
		let mut latest = None;
		for text in self.queries.try_iter() {
			latest = Some(text);
		}
		if let Some(text) = latest {
			self.query = text;
			self.debouncer.schedule(ctx.now);
		}
		if self.debouncer.poll(ctx.now) {
			let query = self.query.clone();
			self.search_now(&query, ctx);
		}
	}

	fn row_count(&self) -> usize {
		self.results.len()
	}

	fn row(&self, index: usize, theme: &Theme) -> Line<'static> {
		let Some(record) = self.results.get(index) else {
			return Line::default();
		};
		let label = record.label();
		let matched = self.query.chars().count().min(label.chars().count());
		let split = label
			.char_indices()
			.nth(matched)
			.map_or(label.len(), |(at, _)| at);
		let (head, tail) = label.split_at(split);
		Line::from(vec![
			Span::styled(head.to_string(), theme.highlight),
			Span::raw(tail.to_string()),
		])
	}

	fn did_select_row(&mut self, index: usize, ctx: &mut ViewContext<'_>) {
		self.show_detail(index, ctx);
	}

	fn render_detail(&self, selected: Option<usize>, frame: &mut Frame, area: Rect, theme: &Theme) {
		let Some(record) = self.record(selected) else {
			return;
		};
		let lines = match record {
			Record::Person(person) => vec![
				Line::styled(person.full_name(), theme.header),
				Line::default(),
				field("Gender", person.gender.to_string(), theme),
				field("Region", person.region.clone(), theme),
			],
			Record::Image(image) => vec![
				Line::styled(image.name.clone(), theme.header),
				Line::default(),
				field("Format", image.format.to_uppercase(), theme),
				field("File", image.file_name(), theme),
			],
		};
		frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
	}
}

fn field(label: &str, value: String, theme: &Theme) -> Line<'static> {
	Line::from(vec![
		Span::styled(format!("{label}: "), theme.label),
		Span::raw(value),
	])
}

#[cfg(test)]
mod tests {
	use std::time::Instant;

	use ratatui::Terminal;
	use ratatui::backend::TestBackend;
	use spotlight_core::{Breakpoint, Region};
	use spotlight_tui::{ViewOptions, buffer_to_string};

	use super::*;
	use crate::demo::records::mock_records;

	const EXPAND_BY: f64 = 8.0;

	fn setup() -> (SearchView, DemoController) {
		let mut view = SearchView::new(ViewOptions::default()).unwrap();
		let controller = DemoController::attach(&mut view, mock_records(), EXPAND_BY, SEARCH_DEBOUNCE);
		view.handle().breakpoint_changed(Breakpoint::Regular);
		view.pump();
		(view, controller)
	}

	fn frame(view: &mut SearchView, controller: &mut DemoController, now: Instant) {
		view.pump();
		view.tick(now);
		view.update(controller, now);
		view.pump();
		view.tick(now);
	}

	#[test]
	fn typing_searches_after_the_debounce() {
		let (mut view, mut controller) = setup();
		let start = Instant::now();
		view.set_text("jack");
		frame(&mut view, &mut controller, start);
		assert!(controller.is_search_pending());
		assert!(controller.results().is_empty());

		frame(&mut view, &mut controller, start + SEARCH_DEBOUNCE);
		assert_eq!(controller.results().len(), 3);
		assert_eq!(view.selected(), Some(0));
		assert_eq!(view.height_constraint().constant(), 2.0 + EXPAND_BY);
		assert_eq!(view.panel().results_opacity(), 1.0);
		assert_eq!(view.panel().search_bar().result_type_image(), Some("☺"));
	}

	#[test]
	fn a_new_keystroke_restarts_the_debounce() {
		let (mut view, mut controller) = setup();
		let start = Instant::now();
		view.set_text("j");
		frame(&mut view, &mut controller, start);
		view.set_text("ju");
		frame(&mut view, &mut controller, start + Duration::from_millis(80));
		frame(&mut view, &mut controller, start + Duration::from_millis(120));
		assert!(controller.results().is_empty());

		frame(&mut view, &mut controller, start + Duration::from_millis(180));
		assert_eq!(controller.query(), "ju");
		assert_eq!(controller.results().len(), 1);
		assert_eq!(view.panel().search_bar().result_type_image(), Some("▣"));
	}

	#[test]
	fn no_results_collapse_with_an_animation() {
		let (mut view, mut controller) = setup();
		let now = Instant::now();
		{
			let mut ctx = view.context(now);
			controller.search_now("joe", &mut ctx);
		}
		frame(&mut view, &mut controller, now);
		assert!(view.panel().is_expanded());

		{
			let mut ctx = view.context(now);
			controller.search_now("zed", &mut ctx);
		}
		view.pump();
		assert!(view.panel().is_animating());
		assert_eq!(view.selected(), None);
		assert_eq!(view.panel().search_bar().result_type_image(), None);

		view.tick(now + Duration::from_secs(1));
		assert!(!view.panel().is_animating());
		assert_eq!(view.height_constraint().constant(), 2.0);
		assert_eq!(view.panel().results_opacity(), 0.0);
	}

	#[test]
	fn selecting_a_row_updates_the_glyph_and_detail() {
		let (mut view, mut controller) = setup();
		let now = Instant::now();
		{
			let mut ctx = view.context(now);
			controller.search_now("j", &mut ctx);
		}
		frame(&mut view, &mut controller, now);
		let down = ratatui::crossterm::event::KeyEvent::from(ratatui::crossterm::event::KeyCode::Down);
		for _ in 0..3 {
			view.handle_key(down, &mut controller, now);
		}
		assert_eq!(view.selected(), Some(3));
		assert_eq!(view.panel().search_bar().result_type_image(), Some("▣"));

		let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
		terminal.draw(|f| view.draw(f, &controller)).unwrap();
		let screen = buffer_to_string(terminal.backend().buffer());
		let detail_x = view.panel().frame_of(Region::DetailPane).unwrap().x;
		assert!(detail_x > 20.0);
		assert!(screen.contains("Jackie Chan"));
		assert!(screen.contains("File: Jackie Chan.jpg"));
	}

	#[test]
	fn rows_highlight_the_matched_prefix() {
		let (mut view, mut controller) = setup();
		{
			let mut ctx = view.context(Instant::now());
			controller.search_now("jo", &mut ctx);
		}
		let theme = Theme::default();
		let row = controller.row(0, &theme);
		assert_eq!(row.spans[0].content, "Jo");
		assert_eq!(row.spans[0].style, theme.highlight);
		assert_eq!(row.spans[1].content, "e Daniels");
	}
}
