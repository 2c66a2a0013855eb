use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub enum LineCap {
	#[display("butt")]
	Butt,
	#[default]
	#[display("round")]
	Round,
	#[display("square")]
	Square,
}

impl LineCap {
	pub fn as_str(self) -> &'static str {
		match self {
			LineCap::Butt => "butt",
			LineCap::Round => "round",
			LineCap::Square => "square",
		}
	}
}

/// The pen used for every segment. Values are handed to the surface as-is; a surface that
/// rejects a color or width keeps using whatever it had before, like the canvas 2D API does.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
	pub color: String,
	pub line_width: f64,
	pub line_cap: LineCap,
}

pub const DEFAULT_STROKE_COLOR: &str = "black";
pub const WHITE_STROKE_COLOR: &str = "white";
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;

impl Default for StrokeStyle {
	fn default() -> Self {
		Self {
			color: DEFAULT_STROKE_COLOR.to_owned(),
			line_width: DEFAULT_LINE_WIDTH,
			line_cap: LineCap::default(),
		}
	}
}

impl StrokeStyle {
	/// Whether the pen is the `white` eraser. Only that exact keyword counts; other spellings of
	/// white are ordinary colors.
	pub fn is_white(&self) -> bool {
		self.color == WHITE_STROKE_COLOR
	}
}

/// A straight line between two consecutive samples, in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
	pub from: Vec2,
	pub to: Vec2,
}

impl Segment {
	pub fn new(from: Vec2, to: Vec2) -> Self {
		Self { from, to }
	}

	pub fn length(&self) -> f32 {
		self.from.distance(self.to)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use glam::vec2;

	#[test]
	fn test_default_style() {
		let style = StrokeStyle::default();
		assert_eq!(style.color, "black");
		assert_eq!(style.line_width, 2.0);
		assert_eq!(style.line_cap, LineCap::Round);
		assert_eq!(style.line_cap.to_string(), "round");
	}

	#[test]
	fn test_is_white() {
		let white = |color: &str| {
			StrokeStyle {
				color: color.to_owned(),
				..Default::default()
			}
			.is_white()
		};
		assert!(white("white"));
		assert!(!white("#fff"));
		assert!(!white("#ffffff"));
		assert!(!white("WHITE"));
		assert!(!white("rgb(255, 255, 255)"));
		assert!(!white("black"));
		assert!(!white("not a color"));
	}

	#[test]
	fn test_segment_length() {
		let segment = Segment::new(vec2(10.0, 10.0), vec2(13.0, 14.0));
		approx::assert_relative_eq!(segment.length(), 5.0);
	}
}
