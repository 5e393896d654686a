//! Mapping between the panel's point geometry and terminal cells.
//!
//! One point is one cell. Edges are rounded to the nearest cell boundary, so
//! a split list of 39.5 points followed by a detail pane starting at 39.5
//! share no column.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use spotlight_core::{DividerCanvas, Point, Rect as PanelRect};

const HORIZONTAL: &str = "─";
const VERTICAL: &str = "│";
const JUNCTION: &str = "┬";

/// Convert a panel-space rectangle into cells relative to `origin`, clipped
/// to `clip`.
#[must_use]
pub fn to_cells(rect: PanelRect, origin: Rect, clip: Rect) -> Rect {
	let x0 = rect.min_x().round().max(0.0);
	let y0 = rect.min_y().round().max(0.0);
	let x1 = rect.max_x().round().max(x0);
	let y1 = rect.max_y().round().max(y0);
	let cells = Rect {
		x: origin.x.saturating_add(clamp_u16(x0)),
		y: origin.y.saturating_add(clamp_u16(y0)),
		width: clamp_u16(x1 - x0),
		height: clamp_u16(y1 - y0),
	};
	cells.intersection(clip)
}

/// Panel-space bounds covering `area`.
#[must_use]
pub fn to_points(area: Rect) -> PanelRect {
	PanelRect::new(
		f64::from(area.x),
		f64::from(area.y),
		f64::from(area.width),
		f64::from(area.height),
	)
}

fn clamp_u16(value: f64) -> u16 {
	value.clamp(0.0, f64::from(u16::MAX)) as u16
}

/// [`DividerCanvas`] that paints box-drawing cells into a ratatui buffer.
///
/// Coordinates are absolute buffer positions. Strokes are clipped to the
/// buffer area and to the optional clip rectangle.
pub struct BufferCanvas<'b> {
	buffer: &'b mut Buffer,
	clip: Rect,
	strokes: usize,
}

impl<'b> BufferCanvas<'b> {
	pub fn new(buffer: &'b mut Buffer) -> Self {
		let clip = buffer.area;
		Self {
			buffer,
			clip,
			strokes: 0,
		}
	}

	/// Restrict painting to `clip`.
	#[must_use]
	pub fn clipped(mut self, clip: Rect) -> Self {
		self.clip = self.clip.intersection(clip);
		self
	}

	/// Number of strokes that touched at least one cell.
	#[must_use]
	pub fn strokes(&self) -> usize {
		self.strokes
	}

	fn contains(&self, x: u16, y: u16) -> bool {
		x >= self.clip.left() && x < self.clip.right() && y >= self.clip.top() && y < self.clip.bottom()
	}

	fn paint(&mut self, x: u16, y: u16, symbol: &str, color: Color) -> bool {
		if !self.contains(x, y) {
			return false;
		}
		self.buffer[(x, y)].set_symbol(symbol).set_fg(color);
		true
	}
}

impl DividerCanvas for BufferCanvas<'_> {
	fn stroke_line(&mut self, from: Point, to: Point, _width: f64, color: Color) {
		let mut painted = false;
		if from.y == to.y {
			let y = from.y.floor();
			if y < 0.0 {
				return;
			}
			let y = clamp_u16(y);
			let (start, end) = span(from.x, to.x);
			for x in start..end {
				painted |= self.paint(x, y, HORIZONTAL, color);
			}
		} else {
			let x = from.x.min(to.x).floor();
			if x < 0.0 {
				return;
			}
			let x = clamp_u16(x);
			let (start, end) = span(from.y, to.y);
			if start > 0 && self.contains(x, start - 1) && self.buffer[(x, start - 1)].symbol() == HORIZONTAL {
				self.buffer[(x, start - 1)].set_symbol(JUNCTION);
			}
			for y in start..end {
				painted |= self.paint(x, y, VERTICAL, color);
			}
		}
		if painted {
			self.strokes += 1;
		}
	}
}

fn span(a: f64, b: f64) -> (u16, u16) {
	let (low, high) = if a <= b { (a, b) } else { (b, a) };
	(clamp_u16(low.floor()), clamp_u16(high.ceil()))
}
