//! Plain geometry in abstract layout units.
//!
//! Hosts decide what a unit means; the terminal host maps one unit to one cell.

/// A location in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	#[must_use]
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// A width/height pair in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
	pub width: f64,
	pub height: f64,
}

impl Size {
	#[must_use]
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}
}

/// An axis-aligned rectangle whose origin is its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

impl Rect {
	#[must_use]
	pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	/// A rectangle anchored at the origin with the given size.
	#[must_use]
	pub const fn from_size(size: Size) -> Self {
		Self::new(0.0, 0.0, size.width, size.height)
	}

	#[must_use]
	pub const fn origin(&self) -> Point {
		Point::new(self.x, self.y)
	}

	#[must_use]
	pub const fn size(&self) -> Size {
		Size::new(self.width, self.height)
	}

	#[must_use]
	pub fn min_x(&self) -> f64 {
		self.x
	}

	#[must_use]
	pub fn max_x(&self) -> f64 {
		self.x + self.width
	}

	#[must_use]
	pub fn min_y(&self) -> f64 {
		self.y
	}

	#[must_use]
	pub fn max_y(&self) -> f64 {
		self.y + self.height
	}

	/// Return the rectangle translated by `dx`/`dy`.
	#[must_use]
	pub fn offset(&self, dx: f64, dy: f64) -> Self {
		Self::new(self.x + dx, self.y + dy, self.width, self.height)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn edges_follow_origin_and_size() {
		let rect = Rect::new(2.0, 3.0, 10.0, 4.0);
		assert_eq!(rect.max_x(), 12.0);
		assert_eq!(rect.max_y(), 7.0);
		assert_eq!(rect.offset(1.0, -1.0).origin(), Point::new(3.0, 2.0));
	}
}
