use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::{ConfigSources, ResolvedConfig};
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	let mut sources = ConfigSources::from_environment();
	raw.apply_cli_overrides(cli, &mut sources);
	raw.resolve(&sources)
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;

	use super::*;

	fn cli(args: &[&str]) -> CliArgs {
		let mut argv = vec!["spotlight", "--no-config"];
		argv.extend_from_slice(args);
		CliArgs::parse_from(argv)
	}

	#[test]
	fn config_file_values_are_read_and_cli_flags_win() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("spotlight.toml");
		fs::write(
			&path,
			r#"
[panel]
bar_height = 3
expand_by = 10
divider_color = "blue"
corner_radius = 6
border_width = 1

[search_bar]
placeholder = "Find people"

[ui]
theme = "light"
"#,
		)
		.unwrap();

		let path = path.to_string_lossy().into_owned();
		let resolved = load(&cli(&["--config", &path, "--expand-by", "4"])).unwrap();
		assert_eq!(resolved.panel.bar_height, 3.0);
		assert_eq!(resolved.expand_by, 4.0);
		assert_eq!(resolved.panel.divider_color, ratatui::style::Color::Blue);
		assert_eq!(resolved.panel.appearance.border_width, 1.0);
		assert_eq!(resolved.placeholder, "Find people");
		assert_eq!(resolved.theme_name, "light");
	}

	#[test]
	fn invalid_cli_value_names_the_flag() {
		let err = load(&cli(&["--bar-height", "0"])).unwrap_err();
		let message = err.to_string();
		assert!(message.contains("panel.bar_height"), "{message}");
		assert!(message.contains("CLI flag `--bar-height`"), "{message}");
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("absent.toml");
		let path = path.to_string_lossy().into_owned();
		assert!(load(&cli(&["--config", &path])).is_err());
	}
}
