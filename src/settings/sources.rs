use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use tracing::debug;

use crate::cli::CliArgs;
use spotlight::app_dirs;

/// Prefix of environment overrides, e.g. `SPOTLIGHT__PANEL__BAR_HEIGHT`.
const ENV_PREFIX: &str = "spotlight";

/// One input to the layered configuration, lowest precedence first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ConfigLayer {
	/// A discovered file that may be absent.
	Discovered(PathBuf),
	/// A file named with `--config`; it must exist.
	Explicit(PathBuf),
	Environment,
}

/// Layers consulted for `cli`, in the order they are applied.
pub(super) fn layers(cli: &CliArgs) -> Vec<ConfigLayer> {
	let mut layers = Vec::new();
	if !cli.no_config {
		layers.extend(discovered_files().into_iter().map(ConfigLayer::Discovered));
	}
	layers.extend(cli.config.iter().cloned().map(ConfigLayer::Explicit));
	layers.push(ConfigLayer::Environment);
	layers
}

/// Merge every layer into a single [`Config`].
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let builder = layers(cli)
		.into_iter()
		.fold(Config::builder(), |builder, layer| {
			debug!(?layer, "adding configuration layer");
			match layer {
				ConfigLayer::Discovered(path) => builder.add_source(File::from(path).required(false)),
				ConfigLayer::Explicit(path) => builder.add_source(File::from(path).required(true)),
				ConfigLayer::Environment => builder.add_source(
					Environment::with_prefix(ENV_PREFIX)
						.separator("__")
						.try_parsing(true),
				),
			}
		});
	builder.build().context("failed to read configuration")
}

/// The user config file, then the hidden and plain project files in the
/// working directory.
fn discovered_files() -> Vec<PathBuf> {
	let mut files = Vec::new();
	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}
	if let Ok(cwd) = env::current_dir() {
		files.extend([".spotlight.toml", "spotlight.toml"].map(|name| cwd.join(name)));
	}
	files
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;

	#[test]
	fn discovered_files_come_first_and_environment_last() {
		let cli = CliArgs::parse_from(["spotlight", "--config", "extra.toml"]);
		let layers = layers(&cli);
		assert!(layers.iter().any(|layer| matches!(
			layer,
			ConfigLayer::Discovered(path) if path.ends_with(".spotlight.toml")
		)));
		let explicit = layers
			.iter()
			.position(|layer| *layer == ConfigLayer::Explicit(PathBuf::from("extra.toml")));
		assert_eq!(explicit, Some(layers.len() - 2));
		assert_eq!(layers.last(), Some(&ConfigLayer::Environment));
	}

	#[test]
	fn no_config_skips_discovery() {
		let cli = CliArgs::parse_from(["spotlight", "--no-config"]);
		assert_eq!(layers(&cli), vec![ConfigLayer::Environment]);
	}
}
