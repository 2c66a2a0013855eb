use super::{Segment, StrokeStyle};
use crate::geom::SurfaceRect;
use crate::util::JsError;
use wasm_bindgen::JsCast;

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
	#[error("2d rendering context unavailable")]
	ContextUnavailable,

	#[error("javascript error: {0}")]
	Js(#[from] JsError),

	#[error("failed to encode snapshot: {0}")]
	Encode(String),
}

static_assertions::assert_impl_all!(SurfaceError: std::error::Error, Send, Sync);

/// A pixel surface the sketchpad paints on.
///
/// The operations mirror the subset of the canvas 2D API the widget needs. Invalid stroke
/// parameters are not an error: implementations keep their previous values instead.
pub trait Surface {
	fn resize(&mut self, width: u32, height: u32);

	fn size(&self) -> (u32, u32);

	/// The surface's current bounding rectangle in client coordinates.
	fn bounding_rect(&self) -> SurfaceRect;

	/// Paints the whole surface with an opaque color.
	fn fill(&mut self, color: &str);

	/// Resets every pixel to transparent.
	fn clear(&mut self);

	fn stroke_segment(&mut self, segment: Segment, style: &StrokeStyle);

	/// Encodes the current pixels as a PNG data URL.
	fn to_data_url(&self) -> Result<String, SurfaceError>;
}

/// An HTML `<canvas>` and its 2D context.
#[derive(Debug, Clone)]
pub struct CanvasSurface {
	canvas: web_sys::HtmlCanvasElement,
	context: web_sys::CanvasRenderingContext2d,
}

impl CanvasSurface {
	#[tracing::instrument(err, skip_all)]
	pub fn new(canvas: web_sys::HtmlCanvasElement) -> Result<Self, SurfaceError> {
		let context = canvas
			.get_context("2d")
			.map_err(JsError::from)?
			.ok_or(SurfaceError::ContextUnavailable)?
			.dyn_into::<web_sys::CanvasRenderingContext2d>()
			.map_err(|_| SurfaceError::ContextUnavailable)?;
		Ok(Self { canvas, context })
	}

	pub fn canvas(&self) -> &web_sys::HtmlCanvasElement {
		&self.canvas
	}
}

impl Surface for CanvasSurface {
	fn resize(&mut self, width: u32, height: u32) {
		self.canvas.set_width(width);
		self.canvas.set_height(height);
	}

	fn size(&self) -> (u32, u32) {
		(self.canvas.width(), self.canvas.height())
	}

	fn bounding_rect(&self) -> SurfaceRect {
		SurfaceRect::from(&self.canvas.get_bounding_client_rect())
	}

	fn fill(&mut self, color: &str) {
		let (width, height) = self.size();
		self.context.set_fill_style_str(color);
		self
			.context
			.fill_rect(0.0, 0.0, width as f64, height as f64);
	}

	fn clear(&mut self) {
		let (width, height) = self.size();
		self
			.context
			.clear_rect(0.0, 0.0, width as f64, height as f64);
	}

	fn stroke_segment(&mut self, segment: Segment, style: &StrokeStyle) {
		let context = &self.context;
		context.set_stroke_style_str(&style.color);
		context.set_line_width(style.line_width);
		context.set_line_cap(style.line_cap.as_str());
		context.begin_path();
		context.move_to(segment.from.x as f64, segment.from.y as f64);
		context.line_to(segment.to.x as f64, segment.to.y as f64);
		context.stroke();
	}

	fn to_data_url(&self) -> Result<String, SurfaceError> {
		Ok(self.canvas.to_data_url().map_err(JsError::from)?)
	}
}
