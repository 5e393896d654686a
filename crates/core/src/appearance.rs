//! Styling property bags attached to the panel and its search bar.
//!
//! These are pass-through values: the model stores them and hosts decide how
//! to present them.

use ratatui::style::Color;

use crate::geometry::Point;

/// Surface styling of a view: clipping, border, corner and drop shadow.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerAppearance {
	pub mask_to_bounds: bool,
	pub corner_radius: f64,
	pub border_width: f64,
	pub border_color: Option<Color>,
	pub shadow_color: Option<Color>,
	pub shadow_opacity: f32,
	pub shadow_radius: f64,
	pub shadow_offset: Point,
}

impl Default for LayerAppearance {
	fn default() -> Self {
		Self {
			mask_to_bounds: false,
			corner_radius: 0.0,
			border_width: 0.0,
			border_color: None,
			shadow_color: None,
			shadow_opacity: 0.0,
			shadow_radius: 3.0,
			shadow_offset: Point::new(0.0, -3.0),
		}
	}
}

impl LayerAppearance {
	/// Whether a border should be presented at all.
	#[must_use]
	pub fn has_border(&self) -> bool {
		self.border_width > 0.0
	}

	/// Whether a drop shadow should be presented at all.
	#[must_use]
	pub fn has_shadow(&self) -> bool {
		self.shadow_opacity > 0.0 && self.shadow_color.is_some()
	}
}

/// Styling of the search bar: icon tint, text colour and inner margin.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchBarAppearance {
	pub layer: LayerAppearance,
	pub search_icon_color: Color,
	pub text_color: Option<Color>,
	pub margin: f64,
}

impl Default for SearchBarAppearance {
	fn default() -> Self {
		Self {
			layer: LayerAppearance::default(),
			search_icon_color: Color::Gray,
			text_color: None,
			margin: 1.0,
		}
	}
}
