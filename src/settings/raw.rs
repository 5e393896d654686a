use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;
use spotlight::demo::SEARCH_DEBOUNCE;
use spotlight::tui::{ViewOptions, by_name};
use spotlight_core::{LayerAppearance, PanelConfig, Point, SearchBarAppearance};

use crate::cli::CliArgs;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};
use super::util::{parse_color, parse_optional_color};

const DEFAULT_BAR_HEIGHT: f64 = 2.0;
const DEFAULT_EXPAND_BY: f64 = 12.0;
const DEFAULT_THEME: &str = "slate";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	panel: PanelSection,
	search_bar: SearchBarSection,
	ui: UiSection,
}

/// Panel geometry and chrome as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct PanelSection {
	bar_height: Option<f64>,
	expand_by: Option<f64>,
	regular_min_width: Option<u16>,
	divider_color: Option<String>,
	mask_to_bounds: Option<bool>,
	corner_radius: Option<f64>,
	border_width: Option<f64>,
	border_color: Option<String>,
	shadow_color: Option<String>,
	shadow_opacity: Option<f32>,
	shadow_radius: Option<f64>,
	shadow_offset_x: Option<f64>,
	shadow_offset_y: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchBarSection {
	icon_color: Option<String>,
	text_color: Option<String>,
	margin: Option<f64>,
	border_width: Option<f64>,
	border_color: Option<String>,
	corner_radius: Option<f64>,
	placeholder: Option<String>,
	text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	empty_message: Option<String>,
	debounce_ms: Option<u64>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values, recording
	/// which flag supplied each one.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs, sources: &mut ConfigSources) {
		if let Some(value) = cli.bar_height {
			self.panel.bar_height = Some(value);
			sources.record("panel.bar_height", SettingSource::CliFlag("--bar-height"));
		}
		if let Some(value) = cli.expand_by {
			self.panel.expand_by = Some(value);
			sources.record("panel.expand_by", SettingSource::CliFlag("--expand-by"));
		}
		if let Some(value) = cli.regular_min_width {
			self.panel.regular_min_width = Some(value);
			sources.record(
				"panel.regular_min_width",
				SettingSource::CliFlag("--regular-min-width"),
			);
		}
		if let Some(value) = cli.divider_color.clone() {
			self.panel.divider_color = Some(value);
			sources.record("panel.divider_color", SettingSource::CliFlag("--divider-color"));
		}
		if let Some(value) = cli.placeholder.clone() {
			self.search_bar.placeholder = Some(value);
		}
		if let Some(value) = cli.query.clone() {
			self.search_bar.text = Some(value);
		}
		if let Some(value) = cli.theme.clone() {
			self.ui.theme = Some(value);
			sources.record("ui.theme", SettingSource::CliFlag("--theme"));
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<ResolvedConfig> {
		let panel = self.panel;
		let bar = self.search_bar;

		let theme_name = self
			.ui
			.theme
			.map(|name| name.trim().to_ascii_lowercase())
			.filter(|name| !name.is_empty())
			.unwrap_or_else(|| DEFAULT_THEME.to_string());
		let theme = by_name(&theme_name).ok_or_else(|| {
			ConfigError::invalid(
				"ui.theme",
				theme_name.clone(),
				sources.source_for("ui.theme"),
				"unknown theme (see --list-themes)",
			)
		})?;

		let defaults = ViewOptions::default();
		let appearance_defaults = LayerAppearance::default();
		let bar_defaults = SearchBarAppearance::default();

		let divider_color = match panel.divider_color.as_deref() {
			Some(value) => parse_color(
				"panel.divider_color",
				value,
				sources.source_for("panel.divider_color"),
			)?,
			None => defaults.panel.divider_color,
		};
		let appearance = LayerAppearance {
			mask_to_bounds: panel.mask_to_bounds.unwrap_or(appearance_defaults.mask_to_bounds),
			corner_radius: panel.corner_radius.unwrap_or(appearance_defaults.corner_radius),
			border_width: panel.border_width.unwrap_or(appearance_defaults.border_width),
			border_color: parse_optional_color(
				"panel.border_color",
				panel.border_color.as_deref(),
				sources.source_for("panel.border_color"),
			)?,
			shadow_color: parse_optional_color(
				"panel.shadow_color",
				panel.shadow_color.as_deref(),
				sources.source_for("panel.shadow_color"),
			)?,
			shadow_opacity: panel.shadow_opacity.unwrap_or(appearance_defaults.shadow_opacity),
			shadow_radius: panel.shadow_radius.unwrap_or(appearance_defaults.shadow_radius),
			shadow_offset: Point::new(
				panel.shadow_offset_x.unwrap_or(appearance_defaults.shadow_offset.x),
				panel.shadow_offset_y.unwrap_or(appearance_defaults.shadow_offset.y),
			),
		};
		let search_bar = SearchBarAppearance {
			layer: LayerAppearance {
				corner_radius: bar.corner_radius.unwrap_or(appearance_defaults.corner_radius),
				border_width: bar.border_width.unwrap_or(appearance_defaults.border_width),
				border_color: parse_optional_color(
					"search_bar.border_color",
					bar.border_color.as_deref(),
					sources.source_for("search_bar.border_color"),
				)?,
				..LayerAppearance::default()
			},
			search_icon_color: match bar.icon_color.as_deref() {
				Some(value) => parse_color(
					"search_bar.icon_color",
					value,
					sources.source_for("search_bar.icon_color"),
				)?,
				None => bar_defaults.search_icon_color,
			},
			text_color: parse_optional_color(
				"search_bar.text_color",
				bar.text_color.as_deref(),
				sources.source_for("search_bar.text_color"),
			)?,
			margin: bar.margin.unwrap_or(bar_defaults.margin),
		};

		let config = ResolvedConfig {
			theme_name,
			theme,
			panel: PanelConfig {
				bar_height: panel.bar_height.unwrap_or(DEFAULT_BAR_HEIGHT),
				divider_color,
				appearance,
				search_bar,
				..PanelConfig::default()
			},
			expand_by: panel.expand_by.unwrap_or(DEFAULT_EXPAND_BY),
			regular_min_width: panel.regular_min_width.unwrap_or(defaults.regular_min_width),
			placeholder: bar.placeholder.unwrap_or(defaults.placeholder),
			empty_message: self.ui.empty_message.unwrap_or(defaults.empty_message),
			initial_query: bar.text.unwrap_or_default(),
			debounce: self
				.ui
				.debounce_ms
				.map_or(SEARCH_DEBOUNCE, Duration::from_millis),
		};
		config.validate(sources)?;
		Ok(config)
	}
}
