mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use spotlight::demo::SessionOutcome;
use spotlight::logging;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in spotlight::tui::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
		return Ok(());
	}

	let _log_guard = match logging::init() {
		Ok(guard) => Some(guard),
		Err(err) => {
			eprintln!("Warning: could not initialize file logging: {err:#}");
			None
		}
	};

	if cli.design_preview {
		let frame = SearchWorkflow::from_config(resolved).preview(cli.preview_width, cli.preview_height)?;
		println!("{frame}");
		return Ok(());
	}

	run_search(cli.output, resolved)
}

/// Execute the search workflow and print output in the chosen format.
fn run_search(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let outcome: SessionOutcome = SearchWorkflow::from_config(settings).run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
