use ratatui::style::{Color, Style};

/// A theme containing styles for the panel's contents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	/// Style for detail pane headings.
	pub header: Style,
	/// Style for the selected result row.
	pub row_highlight: Style,
	/// Style for the search text.
	pub prompt: Style,
	/// Style for the placeholder shown while the search text is empty.
	pub placeholder: Style,
	/// Style for empty states.
	pub empty: Style,
	/// Style for the matched part of a result label.
	pub highlight: Style,
	/// Style for secondary labels in the detail pane.
	pub label: Style,
}

impl Theme {
	/// Foreground used when a region is faded out.
	#[must_use]
	pub fn faded_fg(&self) -> Color {
		self.empty.fg.unwrap_or(Color::DarkGray)
	}
}

/// Describes a theme and the names it can be looked up by.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	/// The name of the theme.
	pub name: String,
	/// The theme configuration.
	pub theme: Theme,
	/// Alternate names for the theme.
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	/// Creates a new theme registration with the given name and theme.
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	/// Adds a single alias to this theme registration.
	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}

	/// Whether `name` refers to this theme, ignoring ASCII case.
	#[must_use]
	pub fn matches(&self, name: &str) -> bool {
		self.name.eq_ignore_ascii_case(name)
			|| self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
	}
}
