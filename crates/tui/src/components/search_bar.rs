use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use spotlight_core::SearchBar;
use unicode_width::UnicodeWidthStr;

use super::chrome::render_layer;
use crate::field::SearchField;
use crate::style::Theme;

pub(crate) const SEARCH_ICON: &str = "⌕";

/// Draw the icon, the editable text and the result-type glyph on one row,
/// centred vertically in `area`.
pub(crate) fn render_search_bar(
	frame: &mut Frame,
	area: Rect,
	bar: &SearchBar,
	field: &mut SearchField,
	theme: &Theme,
) {
	let appearance = bar.appearance();
	let area = if appearance.layer.has_border() && area.height >= 3 {
		render_layer(frame, area, &appearance.layer)
	} else {
		area
	};
	if area.is_empty() {
		return;
	}
	let row = Rect {
		y: area.y + (area.height - 1) / 2,
		height: 1,
		..area
	};

	let glyph = bar.result_type_image();
	let (glyph_width, margin) = match glyph {
		Some(glyph) => (
			u16::try_from(glyph.width()).unwrap_or(u16::MAX).saturating_add(1),
			appearance.margin.round().clamp(0.0, f64::from(u16::MAX)) as u16,
		),
		None => (0, 0),
	};
	let [icon_area, text_area, glyph_area, _] = Layout::horizontal([
		Constraint::Length(2),
		Constraint::Fill(1),
		Constraint::Length(glyph_width),
		Constraint::Length(margin),
	])
	.areas(row);

	frame.render_widget(
		Span::styled(SEARCH_ICON, Style::new().fg(appearance.search_icon_color)),
		icon_area,
	);

	let text_style = match appearance.text_color {
		Some(color) => theme.prompt.fg(color),
		None => theme.prompt,
	};
	field.render(frame, text_area, text_style, theme.placeholder);

	if let Some(glyph) = glyph {
		frame.render_widget(
			Paragraph::new(glyph)
				.alignment(Alignment::Right)
				.style(theme.label),
			glyph_area,
		);
	}
}
