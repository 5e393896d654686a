use std::time::Duration;

use spotlight::tui::{Theme, ViewOptions};
use spotlight_core::PanelConfig;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub theme_name: String,
	pub theme: Theme,
	pub panel: PanelConfig,
	/// Height added below the bar when results are shown.
	pub expand_by: f64,
	pub regular_min_width: u16,
	pub placeholder: String,
	pub empty_message: String,
	pub initial_query: String,
	pub debounce: Duration,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Options for building the search view.
	pub fn view_options(&self) -> ViewOptions {
		ViewOptions {
			panel: self.panel.clone(),
			theme: self.theme,
			placeholder: self.placeholder.clone(),
			empty_message: self.empty_message.clone(),
			regular_min_width: self.regular_min_width,
		}
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
