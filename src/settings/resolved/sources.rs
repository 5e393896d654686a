use std::env;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Environment variables that can set each validated key.
const ENVIRONMENT_KEYS: &[(&str, &str)] = &[
	("panel.bar_height", "SPOTLIGHT__PANEL__BAR_HEIGHT"),
	("panel.expand_by", "SPOTLIGHT__PANEL__EXPAND_BY"),
	("panel.regular_min_width", "SPOTLIGHT__PANEL__REGULAR_MIN_WIDTH"),
	("panel.divider_color", "SPOTLIGHT__PANEL__DIVIDER_COLOR"),
	("panel.border_width", "SPOTLIGHT__PANEL__BORDER_WIDTH"),
	("panel.border_color", "SPOTLIGHT__PANEL__BORDER_COLOR"),
	("panel.shadow_color", "SPOTLIGHT__PANEL__SHADOW_COLOR"),
	("panel.shadow_opacity", "SPOTLIGHT__PANEL__SHADOW_OPACITY"),
	("search_bar.icon_color", "SPOTLIGHT__SEARCH_BAR__ICON_COLOR"),
	("search_bar.text_color", "SPOTLIGHT__SEARCH_BAR__TEXT_COLOR"),
	("search_bar.margin", "SPOTLIGHT__SEARCH_BAR__MARGIN"),
	("search_bar.border_width", "SPOTLIGHT__SEARCH_BAR__BORDER_WIDTH"),
	("search_bar.border_color", "SPOTLIGHT__SEARCH_BAR__BORDER_COLOR"),
	("ui.theme", "SPOTLIGHT__UI__THEME"),
];

/// Where each overridden key came from. Keys without an entry came from a
/// configuration file or a default.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	overrides: Vec<(&'static str, SettingSource)>,
}

impl ConfigSources {
	/// Record the environment variables that are currently set.
	pub(crate) fn from_environment() -> Self {
		let mut sources = Self::default();
		for &(key, var) in ENVIRONMENT_KEYS {
			if env::var_os(var).is_some_and(|value| !value.is_empty()) {
				sources.record(key, SettingSource::Environment(var));
			}
		}
		sources
	}

	/// Later records win.
	pub(crate) fn record(&mut self, key: &'static str, source: SettingSource) {
		self.overrides.retain(|(existing, _)| *existing != key);
		self.overrides.push((key, source));
	}

	pub(crate) fn source_for(&self, key: &'static str) -> SettingSource {
		self.overrides
			.iter()
			.find(|(existing, _)| *existing == key)
			.map_or(SettingSource::ConfigKey(key), |(_, source)| source.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cli_flags_replace_earlier_sources() {
		let mut sources = ConfigSources::default();
		assert_eq!(
			sources.source_for("panel.bar_height"),
			SettingSource::ConfigKey("panel.bar_height")
		);
		sources.record(
			"panel.bar_height",
			SettingSource::Environment("SPOTLIGHT__PANEL__BAR_HEIGHT"),
		);
		sources.record("panel.bar_height", SettingSource::CliFlag("--bar-height"));
		assert_eq!(
			sources.source_for("panel.bar_height"),
			SettingSource::CliFlag("--bar-height")
		);
	}
}
