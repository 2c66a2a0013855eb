use glam::Vec2;

/// An axis-aligned rectangle in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceRect {
	origin: Vec2,
	size: Vec2,
}

impl SurfaceRect {
	pub fn new(origin: Vec2, size: Vec2) -> Self {
		Self { origin, size }
	}

	pub fn from_size(width: u32, height: u32) -> Self {
		Self::new(Vec2::ZERO, Vec2::new(width as f32, height as f32))
	}

	pub fn origin(&self) -> Vec2 {
		self.origin
	}

	pub fn size(&self) -> Vec2 {
		self.size
	}

	/// Translates a client position into surface coordinates.
	pub fn to_surface(&self, client: Vec2) -> Vec2 {
		client - self.origin
	}
}

impl From<&web_sys::DomRect> for SurfaceRect {
	fn from(rect: &web_sys::DomRect) -> Self {
		Self::new(
			Vec2::new(rect.left() as f32, rect.top() as f32),
			Vec2::new(rect.width() as f32, rect.height() as f32),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use glam::vec2;

	#[test]
	fn test_to_surface() {
		let rect = SurfaceRect::new(vec2(8.0, 40.5), vec2(200.0, 100.0));
		assert_eq!(rect.to_surface(vec2(18.0, 50.5)), vec2(10.0, 10.0));
		assert_eq!(rect.to_surface(vec2(0.0, 0.0)), vec2(-8.0, -40.5));
	}
}
