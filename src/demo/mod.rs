//! The demo's data and the controller that feeds it to the panel.

mod controller;
mod records;

pub use controller::{DemoController, SEARCH_DEBOUNCE};
pub use records::{Gender, ImageInfo, PersonInfo, Record, mock_records, search};

use serde::Serialize;

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionOutcome {
	/// Whether the user confirmed with Return.
	pub accepted: bool,
	pub query: String,
	pub selection: Option<Record>,
}

impl SessionOutcome {
	#[must_use]
	pub fn cancelled(query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			query: query.into(),
			selection: None,
		}
	}
}
