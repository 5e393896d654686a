use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Offset, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Clear};
use spotlight_core::LayerAppearance;

use crate::style::Theme;

/// Border type standing in for a layer's corner radius and border width.
fn border_type(appearance: &LayerAppearance) -> BorderType {
	if appearance.border_width >= 2.0 {
		BorderType::Thick
	} else if appearance.corner_radius > 0.0 {
		BorderType::Rounded
	} else {
		BorderType::Plain
	}
}

/// Paint the drop shadow of a layer occupying `area`.
pub(crate) fn render_shadow(frame: &mut Frame, area: Rect, appearance: &LayerAppearance) {
	let Some(color) = appearance.shadow_color.filter(|_| appearance.has_shadow()) else {
		return;
	};
	let offset = Offset {
		x: appearance.shadow_offset.x.round() as i32,
		y: appearance.shadow_offset.y.round() as i32,
	};
	let mut style = Style::new().bg(color);
	if appearance.shadow_opacity < 0.5 {
		style = style.add_modifier(Modifier::DIM);
	}
	let shadow = area.offset(offset).intersection(frame.area());
	frame.buffer_mut().set_style(shadow, style);
}

/// Clear `area` and draw the layer's border. Returns the area left for
/// content.
pub(crate) fn render_layer(frame: &mut Frame, area: Rect, appearance: &LayerAppearance) -> Rect {
	frame.render_widget(Clear, area);
	if !appearance.has_border() {
		return area;
	}
	let block = Block::bordered()
		.border_type(border_type(appearance))
		.border_style(Style::new().fg(appearance.border_color.unwrap_or(Color::Reset)));
	let inner = block.inner(area);
	frame.render_widget(block, area);
	inner
}

/// Fade `area` towards the background by `opacity`; fully opaque is a no-op.
pub(crate) fn fade(buffer: &mut Buffer, area: Rect, opacity: f64, theme: &Theme) {
	if opacity >= 1.0 {
		return;
	}
	let mut style = Style::new().add_modifier(Modifier::DIM);
	if opacity < 0.5 {
		style = style.fg(theme.faded_fg());
	}
	buffer.set_style(area, style);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn border_type_follows_width_then_radius() {
		let mut appearance = LayerAppearance {
			border_width: 1.0,
			..LayerAppearance::default()
		};
		assert_eq!(border_type(&appearance), BorderType::Plain);
		appearance.corner_radius = 10.0;
		assert_eq!(border_type(&appearance), BorderType::Rounded);
		appearance.border_width = 2.0;
		assert_eq!(border_type(&appearance), BorderType::Thick);
	}

	#[test]
	fn fade_dims_and_greys_when_mostly_transparent() {
		let area = Rect::new(0, 0, 2, 1);
		let mut buffer = Buffer::empty(area);
		fade(&mut buffer, area, 1.0, &Theme::default());
		assert!(!buffer[(0, 0)].modifier.contains(Modifier::DIM));

		fade(&mut buffer, area, 0.3, &Theme::default());
		assert!(buffer[(0, 0)].modifier.contains(Modifier::DIM));
		assert_eq!(buffer[(1, 0)].fg, Theme::default().faded_fg());
	}
}
