use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let bar_height = config.panel.bar_height;
	if !bar_height.is_finite() || bar_height <= 0.0 {
		return Err(ConfigError::invalid(
			"panel.bar_height",
			bar_height.to_string(),
			sources.source_for("panel.bar_height"),
			"must be greater than zero",
		));
	}

	if !config.expand_by.is_finite() || config.expand_by < 0.0 {
		return Err(ConfigError::invalid(
			"panel.expand_by",
			config.expand_by.to_string(),
			sources.source_for("panel.expand_by"),
			"must not be negative",
		));
	}

	if config.regular_min_width == 0 {
		return Err(ConfigError::invalid(
			"panel.regular_min_width",
			"0",
			sources.source_for("panel.regular_min_width"),
			"must be at least 1",
		));
	}

	let appearance = &config.panel.appearance;
	if !(0.0..=1.0).contains(&appearance.shadow_opacity) {
		return Err(ConfigError::invalid(
			"panel.shadow_opacity",
			appearance.shadow_opacity.to_string(),
			sources.source_for("panel.shadow_opacity"),
			"must be between 0 and 1",
		));
	}

	if appearance.border_width < 0.0 {
		return Err(ConfigError::invalid(
			"panel.border_width",
			appearance.border_width.to_string(),
			sources.source_for("panel.border_width"),
			"must not be negative",
		));
	}

	let bar_border = config.panel.search_bar.layer.border_width;
	if bar_border < 0.0 {
		return Err(ConfigError::invalid(
			"search_bar.border_width",
			bar_border.to_string(),
			sources.source_for("search_bar.border_width"),
			"must not be negative",
		));
	}

	let margin = config.panel.search_bar.margin;
	if margin < 0.0 {
		return Err(ConfigError::invalid(
			"search_bar.margin",
			margin.to_string(),
			sources.source_for("search_bar.margin"),
			"must not be negative",
		));
	}

	Ok(())
}
