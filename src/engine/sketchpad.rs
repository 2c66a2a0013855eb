use super::*;
use crate::geom::SurfaceRect;
use crate::util::ResultExt;
use glam::Vec2;

#[derive(Debug, Clone, PartialEq, bon::Builder)]
pub struct SketchpadConfig {
	#[builder(default = 200)]
	pub width: u32,
	#[builder(default = 100)]
	pub height: u32,
	#[builder(default = "white".to_owned(), into)]
	pub background: String,
	#[builder(default)]
	pub style: StrokeStyle,
}

impl Default for SketchpadConfig {
	fn default() -> Self {
		Self::builder().build()
	}
}

/// A drawing surface driven by pointer-like input, publishing a data URL of its contents after
/// every change.
pub struct Sketchpad<S: Surface> {
	surface: S,
	style: StrokeStyle,
	rect: SurfaceRect,
	chains: Chains,
	publish: Box<dyn Fn(String)>,
}

impl<S: Surface> std::fmt::Debug for Sketchpad<S> {
	fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		fmt
			.debug_struct("Sketchpad")
			.field("style", &self.style)
			.field("rect", &self.rect)
			.field("chains", &self.chains)
			.finish_non_exhaustive()
	}
}

impl<S: Surface> Sketchpad<S> {
	/// Sizes `surface`, paints the background, and publishes the first snapshot.
	#[tracing::instrument(err, skip_all)]
	pub fn initialize(
		mut surface: S,
		config: SketchpadConfig,
		publish: impl Fn(String) + 'static,
	) -> Result<Self, SurfaceError> {
		surface.resize(config.width, config.height);
		surface.fill(&config.background);
		let rect = surface.bounding_rect();
		let pad = Self {
			surface,
			style: config.style,
			rect,
			chains: Chains::new(),
			publish: Box::new(publish),
		};
		let snapshot = pad.snapshot()?;
		(pad.publish)(snapshot);
		tracing::info!(config.width, config.height, ?rect, "sketchpad initialized");
		Ok(pad)
	}

	/// Starts a new interaction for `source`, abandoning any interaction still in progress.
	pub fn begin(&mut self, source: InputSource) {
		self.rect = self.surface.bounding_rect();
		let id = self.chains.start(source);
		tracing::debug!(%source, %id, "interaction started");
	}

	/// Feeds a movement sample in client coordinates. Returns whether a segment was drawn.
	pub fn sample(&mut self, source: InputSource, client: Vec2) -> bool {
		let position = self.rect.to_surface(client);
		let Some((from, to)) = self.chains.sample(source, position) else {
			return false;
		};
		self.draw_segment(Segment::new(from, to));
		true
	}

	pub fn end(&mut self, source: InputSource) {
		if let Some(id) = self.chains.end(source) {
			tracing::debug!(%source, %id, "interaction ended");
		}
	}

	pub fn is_drawing(&self, source: InputSource) -> bool {
		self.chains.is_drawing(source)
	}

	pub fn draw_segment(&mut self, segment: Segment) {
		tracing::trace!(?segment, length = segment.length(), "drawing segment");
		self.surface.stroke_segment(segment, &self.style);
		self.publish_snapshot();
	}

	pub fn set_line_width(&mut self, width: f64) {
		self.style.line_width = width;
	}

	pub fn set_color(&mut self, color: impl Into<String>) {
		self.style.color = color.into();
	}

	/// Erases the surface. A white pen is treated as an eraser and goes back to black.
	pub fn clear(&mut self) {
		self.surface.clear();
		if self.style.is_white() {
			self.style.color = DEFAULT_STROKE_COLOR.to_owned();
		}
		tracing::info!(color = %self.style.color, "sketchpad cleared");
		self.publish_snapshot();
	}

	pub fn snapshot(&self) -> Result<String, SurfaceError> {
		self.surface.to_data_url()
	}

	pub fn style(&self) -> &StrokeStyle {
		&self.style
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}

	fn publish_snapshot(&self) {
		if let Some(snapshot) = self.snapshot().ok_or_log() {
			(self.publish)(snapshot);
		}
	}
}
