use super::{LineCap, Segment, StrokeStyle, Surface, SurfaceError};
use crate::geom::SurfaceRect;
use crate::util::encode_data_url;
use glam::{vec2, Vec2, Vec4};
use zune_core::colorspace::ColorSpace;
use zune_image::codecs::ImageFormat;

type Pixel = [u8; 4];

const TRANSPARENT: Pixel = [0, 0, 0, 0];

fn parse_color(color: &str) -> Option<Vec4> {
	let [r, g, b, a] = csscolorparser::parse(color).ok()?.to_rgba8();
	Some(Vec4::new(r as f32, g as f32, b as f32, a as f32) / 255.0)
}

fn to_pixel(color: Vec4) -> Pixel {
	let c = (color.clamp(Vec4::ZERO, Vec4::ONE) * 255.0).round();
	[c.x as u8, c.y as u8, c.z as u8, c.w as u8]
}

fn from_pixel(pixel: Pixel) -> Vec4 {
	Vec4::new(
		pixel[0] as f32,
		pixel[1] as f32,
		pixel[2] as f32,
		pixel[3] as f32,
	) / 255.0
}

/// Source-over compositing of non-premultiplied colors.
fn blend(source: Vec4, coverage: f32, destination: Pixel) -> Pixel {
	let destination = from_pixel(destination);
	let source_alpha = source.w * coverage;
	let alpha = source_alpha + destination.w * (1.0 - source_alpha);
	if alpha <= 0.0 {
		return TRANSPARENT;
	}
	let rgb = (source.truncate() * source_alpha
		+ destination.truncate() * destination.w * (1.0 - source_alpha))
		/ alpha;
	to_pixel(rgb.extend(alpha))
}

/// Computed in `usize` so large surfaces cannot wrap around `u32`.
fn pixel_count(width: u32, height: u32) -> usize {
	width as usize * height as usize
}

/// How much of the pixel centered at `p` a stroke covers, with a one pixel wide ramp at the edges.
fn coverage(p: Vec2, segment: Segment, half_width: f32, cap: LineCap) -> f32 {
	let delta = segment.to - segment.from;
	let length = delta.length();
	let direction = if length > f32::EPSILON {
		delta / length
	} else {
		Vec2::X
	};
	let relative = p - segment.from;
	let along = relative.dot(direction);
	match cap {
		LineCap::Round => {
			let nearest = segment.from + direction * along.clamp(0.0, length);
			(half_width + 0.5 - p.distance(nearest)).clamp(0.0, 1.0)
		}
		// A zero-length butt segment has no extent along its direction.
		LineCap::Butt if length <= f32::EPSILON => 0.0,
		LineCap::Butt | LineCap::Square => {
			let extension = if cap == LineCap::Square { half_width } else { 0.0 };
			let across = relative.perp_dot(direction).abs();
			let outside = (-extension - along).max(along - length - extension);
			(half_width + 0.5 - across).clamp(0.0, 1.0) * (0.5 - outside).clamp(0.0, 1.0)
		}
	}
}

/// A software surface backed by an RGBA buffer.
///
/// Follows the canvas 2D conventions the widget relies on: a new surface is transparent, an
/// unparsable color or a non-positive width leaves the previous pen in place, and snapshots are
/// PNG data URLs.
#[derive(Debug, Clone)]
pub struct RasterSurface {
	width: u32,
	height: u32,
	pixels: Vec<Pixel>,
	rect: SurfaceRect,
	pen_color: Vec4,
	pen_width: f32,
}

impl RasterSurface {
	pub fn new(width: u32, height: u32) -> Self {
		Self {
			width,
			height,
			pixels: vec![TRANSPARENT; pixel_count(width, height)],
			rect: SurfaceRect::from_size(width, height),
			pen_color: Vec4::W,
			pen_width: 1.0,
		}
	}

	/// Places the surface at `origin` in client coordinates.
	pub fn with_origin(mut self, origin: Vec2) -> Self {
		self.rect = SurfaceRect::new(origin, self.rect.size());
		self
	}

	pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
		(x < self.width && y < self.height).then(|| self.pixels[y as usize * self.width as usize + x as usize])
	}

	pub fn data(&self) -> &[u8] {
		bytemuck::cast_slice(&self.pixels)
	}

	pub fn encode_png(&self) -> Result<Vec<u8>, SurfaceError> {
		let image = zune_image::image::Image::from_u8(
			self.data(),
			self.width as usize,
			self.height as usize,
			ColorSpace::RGBA,
		);
		image
			.write_to_vec(ImageFormat::PNG)
			.map_err(|err| SurfaceError::Encode(format!("{err:?}")))
	}
}

impl Surface for RasterSurface {
	fn resize(&mut self, width: u32, height: u32) {
		// Resizing a canvas resets its contents.
		self.width = width;
		self.height = height;
		self.pixels = vec![TRANSPARENT; pixel_count(width, height)];
		self.rect = SurfaceRect::new(self.rect.origin(), vec2(width as f32, height as f32));
	}

	fn size(&self) -> (u32, u32) {
		(self.width, self.height)
	}

	fn bounding_rect(&self) -> SurfaceRect {
		self.rect
	}

	fn fill(&mut self, color: &str) {
		match parse_color(color) {
			Some(color) => {
				for pixel in self.pixels.iter_mut() {
					*pixel = blend(color, 1.0, *pixel);
				}
			}
			None => tracing::warn!(color, "ignoring unparsable fill color"),
		}
	}

	fn clear(&mut self) {
		self.pixels.fill(TRANSPARENT);
	}

	fn stroke_segment(&mut self, segment: Segment, style: &StrokeStyle) {
		match parse_color(&style.color) {
			Some(color) => self.pen_color = color,
			None => tracing::warn!(color = %style.color, "ignoring unparsable stroke color"),
		}
		if style.line_width.is_finite() && style.line_width > 0.0 {
			self.pen_width = style.line_width as f32;
		}

		let half_width = self.pen_width / 2.0;
		let margin = Vec2::splat(half_width + 1.0);
		let min = (segment.from.min(segment.to) - margin).floor().max(Vec2::ZERO);
		let max = (segment.from.max(segment.to) + margin)
			.ceil()
			.min(vec2(self.width as f32, self.height as f32));
		if min.x >= max.x || min.y >= max.y {
			return;
		}

		for y in min.y as u32..max.y as u32 {
			for x in min.x as u32..max.x as u32 {
				let center = vec2(x as f32 + 0.5, y as f32 + 0.5);
				let coverage = coverage(center, segment, half_width, style.line_cap);
				if coverage > 0.0 {
					let index = y as usize * self.width as usize + x as usize;
					self.pixels[index] = blend(self.pen_color, coverage, self.pixels[index]);
				}
			}
		}
	}

	fn to_data_url(&self) -> Result<String, SurfaceError> {
		Ok(encode_data_url(&self.encode_png()?, Some("image/png")))
	}
}
