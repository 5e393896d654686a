use anyhow::Result;
use serde_json::json;
use spotlight::demo::SessionOutcome;

/// Print a plain-text representation of the selection. Cancelled sessions
/// print nothing.
pub(crate) fn print_plain(outcome: &SessionOutcome) {
	if let Some(text) = format_plain(outcome) {
		println!("{text}");
	}
}

pub(crate) fn format_plain(outcome: &SessionOutcome) -> Option<String> {
	if !outcome.accepted {
		return None;
	}
	Some(match &outcome.selection {
		Some(record) => record.to_string(),
		None => "No selection".to_string(),
	})
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SessionOutcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": outcome.selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of an accepted session.
pub(crate) fn print_json(outcome: &SessionOutcome) -> Result<()> {
	if outcome.accepted {
		println!("{}", format_outcome_json(outcome)?);
	}
	Ok(())
}
