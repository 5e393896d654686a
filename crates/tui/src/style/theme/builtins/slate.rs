use ratatui::style::{Color, Modifier, Style};

use crate::style::theme::types::Theme;

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.add_modifier(Modifier::BOLD),
	row_highlight: Style::new()
		.bg(Color::Rgb(51, 65, 85))
		.fg(Color::Rgb(248, 250, 252)),
	prompt: Style::new().fg(Color::Rgb(241, 245, 249)),
	placeholder: Style::new().fg(Color::Rgb(100, 116, 139)),
	empty: Style::new().fg(Color::Rgb(100, 116, 139)),
	highlight: Style::new()
		.fg(Color::Rgb(56, 189, 248))
		.add_modifier(Modifier::BOLD),
	label: Style::new().fg(Color::Rgb(148, 163, 184)),
};
