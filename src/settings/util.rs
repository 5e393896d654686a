use std::str::FromStr;

use ratatui::style::Color;

use super::resolved::{ConfigError, SettingSource};

/// Parse a colour name (`"gray"`), index (`"244"`) or hex value (`"#1e293b"`).
pub(super) fn parse_color(
	key: &'static str,
	value: &str,
	origin: SettingSource,
) -> Result<Color, ConfigError> {
	Color::from_str(value.trim()).map_err(|_| {
		ConfigError::invalid(key, value, origin, "expected a colour name, index or #rrggbb")
	})
}

/// [`parse_color`] for optional values; an empty string means unset.
pub(super) fn parse_optional_color(
	key: &'static str,
	value: Option<&str>,
	origin: SettingSource,
) -> Result<Option<Color>, ConfigError> {
	match value.map(str::trim) {
		None | Some("") => Ok(None),
		Some(value) => parse_color(key, value, origin).map(Some),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn colours_accept_names_and_hex() {
		let origin = SettingSource::ConfigKey("panel.divider_color");
		assert_eq!(parse_color("panel.divider_color", "gray", origin.clone()).unwrap(), Color::Gray);
		assert_eq!(
			parse_color("panel.divider_color", "#1e293b", origin.clone()).unwrap(),
			Color::Rgb(0x1e, 0x29, 0x3b)
		);
		assert_eq!(parse_optional_color("panel.border_color", Some(" "), origin.clone()).unwrap(), None);
		let err = parse_color("panel.divider_color", "sparkly", origin).unwrap_err();
		assert!(err.to_string().contains("value: sparkly"));
	}
}
