use std::time::Instant;

use anyhow::Result;
use spotlight::demo::{DemoController, SessionOutcome, mock_records};
use spotlight::tui::{SearchView, ViewOutcome, render_preview, run};
use spotlight_core::RenderContext;
use tracing::info;

use crate::settings::ResolvedConfig;

/// Builds the view and controller from configuration and drives a session.
pub(crate) struct SearchWorkflow {
	config: ResolvedConfig,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		Self { config }
	}

	fn build(&self, context: RenderContext) -> Result<(SearchView, DemoController)> {
		let mut options = self.config.view_options();
		options.panel.context = context;
		let mut view = SearchView::new(options)?;
		let controller = DemoController::attach(
			&mut view,
			mock_records(),
			self.config.expand_by,
			self.config.debounce,
		);
		Ok((view, controller))
	}

	/// Run the interactive session until Return or Esc.
	pub(crate) fn run(self) -> Result<SessionOutcome> {
		let (mut view, mut controller) = self.build(RenderContext::Runtime)?;
		if !self.config.initial_query.is_empty() {
			view.set_text(&self.config.initial_query);
		}
		info!(theme = %self.config.theme_name, "starting search session");

		let outcome = match run(&mut view, &mut controller)? {
			ViewOutcome::Selected(row) => SessionOutcome {
				accepted: true,
				query: view.text(),
				selection: controller.record(row).cloned(),
			},
			ViewOutcome::Cancelled => SessionOutcome::cancelled(view.text()),
		};
		Ok(outcome)
	}

	/// Render one design-time frame. Lists every record unless an initial
	/// query narrows it down.
	pub(crate) fn preview(self, width: u16, height: u16) -> Result<String> {
		let (mut view, mut controller) = self.build(RenderContext::DesignTime)?;
		let query = self.config.initial_query.clone();
		view.set_text(&query);
		{
			let mut ctx = view.context(Instant::now());
			if query.is_empty() {
				controller.show_all(&mut ctx);
			} else {
				controller.search_now(&query, &mut ctx);
			}
		}
		render_preview(&mut view, &controller, width, height)
	}
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;
	use crate::cli::CliArgs;

	fn config(query: &str) -> ResolvedConfig {
		let cli = CliArgs::parse_from(["spotlight", "--no-config"]);
		let mut config = crate::settings::load(&cli).unwrap();
		config.initial_query = query.to_string();
		config
	}

	#[test]
	fn design_preview_lists_every_record_in_the_split_layout() {
		let text = SearchWorkflow::from_config(config("")).preview(100, 16).unwrap();
		for label in [
			"Jack Depp",
			"Jack DiCaprio",
			"Joe Daniels",
			"Jackie Chan.jpg",
			"Just Push Play.jpg",
		] {
			assert!(text.contains(label), "{label} missing from\n{text}");
		}
		let lines: Vec<&str> = text.lines().collect();
		assert!(lines[1].starts_with('─'));
		assert!(!text.contains("Gender:"));
		insta::assert_snapshot!(text, @r"
		⌕ Search                                                                                          ☺
		────────────────────────────────────────────────────────────────────────────────────────────────────
		▶ Jack Depp
		  Jack DiCaprio
		  Joe Daniels
		  Jackie Chan.jpg
		  Just Push Play.jpg
		");
	}

	#[test]
	fn design_preview_honours_the_initial_query() {
		let text = SearchWorkflow::from_config(config("joe")).preview(100, 16).unwrap();
		assert!(text.contains("Joe Daniels"));
		assert!(!text.contains("Jack Depp"));
		insta::assert_snapshot!(text, @r"
		⌕ joe                                                                                             ☺
		────────────────────────────────────────────────────────────────────────────────────────────────────
		▶ Joe Daniels
		");
	}
}
