use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use spotlight::app_dirs;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("spotlight {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
	name = "spotlight",
	version,
	long_version = long_version(),
	about = "Spotlight-style search panel demo for the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `spotlight` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "SPOTLIGHT_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Start with this search text (default: empty)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "bar-height",
		value_name = "ROWS",
		help = "Height of the search bar including its divider row (default: 2)"
	)]
	pub(crate) bar_height: Option<f64>,
	#[arg(
		long = "expand-by",
		value_name = "ROWS",
		help = "Rows added below the bar when results are shown (default: 12)"
	)]
	pub(crate) expand_by: Option<f64>,
	#[arg(
		long = "divider-color",
		value_name = "COLOR",
		help = "Colour of the divider lines (default: gray)"
	)]
	pub(crate) divider_color: Option<String>,
	#[arg(
		long = "regular-min-width",
		value_name = "COLUMNS",
		help = "Narrowest terminal that shows the detail pane (default: 80)"
	)]
	pub(crate) regular_min_width: Option<u16>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Placeholder shown while the search text is empty (default: Search)"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		long = "design-preview",
		help = "Print one frame of the split layout with every record listed, then exit"
	)]
	pub(crate) design_preview: bool,
	#[arg(
		long = "preview-width",
		value_name = "COLUMNS",
		default_value_t = 100,
		help = "Width of the design preview"
	)]
	pub(crate) preview_width: u16,
	#[arg(
		long = "preview-height",
		value_name = "ROWS",
		default_value_t = 16,
		help = "Height of the design preview"
	)]
	pub(crate) preview_height: u16,
	#[arg(long = "list-themes", help = "List available themes and exit")]
	pub(crate) list_themes: bool,
	#[arg(
		long = "print-config",
		help = "Print the resolved configuration and exit"
	)]
	pub(crate) print_config: bool,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the selection")]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported for printing the selection.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn command_definition_is_consistent() {
		CliArgs::command().debug_assert();
	}

	#[test]
	fn defaults_are_applied() {
		let parsed = CliArgs::parse_from(["spotlight"]);
		assert_eq!(parsed.output, OutputFormat::Plain);
		assert_eq!(parsed.preview_width, 100);
		assert!(!parsed.design_preview);
		assert!(parsed.config.is_empty());
	}

	#[test]
	fn overrides_parse() {
		let parsed = CliArgs::parse_from([
			"spotlight",
			"--bar-height",
			"3",
			"--divider-color",
			"#334155",
			"-o",
			"json",
			"-c",
			"a.toml",
			"-c",
			"b.toml",
		]);
		assert_eq!(parsed.bar_height, Some(3.0));
		assert_eq!(parsed.divider_color.as_deref(), Some("#334155"));
		assert_eq!(parsed.output, OutputFormat::Json);
		assert_eq!(parsed.config.len(), 2);
	}
}
