use crate::engine::{self, CanvasSurface, InputSource, SketchpadConfig, StrokeStyle};
use crate::util::*;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos_use::use_event_listener;

type Pad = engine::Sketchpad<CanvasSurface>;

/// Handle through which a page drives a `<Sketchpad>` and observes its output.
///
/// Until the component has mounted and acquired a 2D context, every operation is a no-op and
/// the snapshot is empty. A failed setup is recorded in `errors` and the controller stays unready.
#[derive(Clone, Copy)]
pub struct SketchpadController {
	pad: StoredValue<Option<Pad>, LocalStorage>,
	snapshot: RwSignal<String>,
	style: RwSignal<StrokeStyle>,
	ready: RwSignal<bool>,
	errors: RwSignal<Vec<String>>,
}

impl Default for SketchpadController {
	fn default() -> Self {
		Self::new()
	}
}

impl SketchpadController {
	pub fn new() -> Self {
		Self {
			pad: StoredValue::new_local(None),
			snapshot: RwSignal::new(String::new()),
			style: RwSignal::new(StrokeStyle::default()),
			ready: RwSignal::new(false),
			errors: RwSignal::new(Vec::new()),
		}
	}

	/// The data URL of the latest drawing.
	pub fn snapshot(&self) -> ReadSignal<String> {
		self.snapshot.read_only()
	}

	/// The pen used for the next segment.
	pub fn style(&self) -> ReadSignal<StrokeStyle> {
		self.style.read_only()
	}

	/// Whether a surface is attached. Tracked when read inside a reactive scope.
	pub fn is_ready(&self) -> bool {
		self.ready.try_get().unwrap_or(false)
	}

	/// Setup failures, oldest first.
	pub fn errors(&self) -> ReadSignal<Vec<String>> {
		self.errors.read_only()
	}

	/// Acquires a 2D context on `canvas` and attaches a sketchpad to it. On failure the error is
	/// logged and recorded, and the controller keeps ignoring every operation.
	pub fn initialize(&self, canvas: web_sys::HtmlCanvasElement, config: SketchpadConfig) -> bool {
		let snapshot = self.snapshot;
		let errors = self.errors;
		let pad = CanvasSurface::new(canvas)
			.and_then(|surface| Pad::initialize(surface, config, move |url| snapshot.set(url)))
			.inspect_err(|error| errors.update(|errors| errors.push(error.to_string())))
			.ok_or_log_context("sketchpad unavailable");
		match pad {
			Some(pad) => {
				self.attach(pad);
				true
			}
			None => false,
		}
	}

	pub fn set_line_width(&self, width: f64) {
		self.with_pad(|pad| pad.set_line_width(width));
	}

	pub fn set_color(&self, color: impl Into<String>) {
		let color = color.into();
		self.with_pad(move |pad| pad.set_color(color));
	}

	pub fn clear(&self) {
		self.with_pad(|pad| pad.clear());
	}

	fn attach(&self, pad: Pad) {
		self.style.set(pad.style().clone());
		self.pad.set_value(Some(pad));
		self.ready.set(true);
	}

	fn detach(&self) {
		self.pad.try_update_value(|pad| *pad = None);
		self.ready.try_set(false);
	}

	fn with_pad<O>(&self, f: impl FnOnce(&mut Pad) -> O) -> Option<O> {
		let (result, style) = self
			.pad
			.try_update_value(|pad| {
				let pad = pad.as_mut()?;
				let result = f(pad);
				Some((result, pad.style().clone()))
			})
			.flatten()?;
		if self.style.with_untracked(|current| *current != style) {
			self.style.set(style);
		}
		Some(result)
	}

	fn begin<E: PointerLike>(&self, _event: &E) {
		self.with_pad(|pad| pad.begin(E::SOURCE));
	}

	fn sample<E: PointerLike>(&self, event: &E) {
		let Some(position) = event.client_position() else {
			return;
		};
		self.with_pad(|pad| pad.sample(E::SOURCE, position));
	}

	fn end(&self, source: InputSource) {
		self.with_pad(|pad| pad.end(source));
	}
}

/// A 2D drawing surface. Mouse and touch input draw with the controller's pen, and every stroke
/// segment republishes the controller's snapshot.
#[component]
pub fn Sketchpad(
	controller: SketchpadController,
	#[prop(optional)] config: Option<SketchpadConfig>,
) -> impl IntoView {
	let node_ref = NodeRef::<html::Canvas>::new();
	let config = config.unwrap_or_default();

	Effect::new(move |initialized: Option<bool>| {
		if initialized == Some(true) {
			return true;
		}
		let Some(canvas) = node_ref.get() else {
			return false;
		};
		controller.initialize(canvas, config.clone());
		true
	});
	on_cleanup(move || controller.detach());

	let _ = use_event_listener(node_ref, ev::mousedown, move |e| controller.begin(&e));
	let _ = use_event_listener(node_ref, ev::mousemove, move |e| controller.sample(&e));
	let _ = use_event_listener(node_ref, ev::mouseup, move |_| {
		controller.end(InputSource::Mouse)
	});
	let _ = use_event_listener(node_ref, ev::mouseleave, move |_| {
		controller.end(InputSource::Mouse)
	});

	let _ = use_event_listener(node_ref, ev::touchstart, move |e| {
		prevent_default_and_false(&e);
		controller.begin(&e);
	});
	let _ = use_event_listener(node_ref, ev::touchmove, move |e| {
		prevent_default_and_false(&e);
		controller.sample(&e);
	});
	let _ = use_event_listener(node_ref, ev::touchend, move |_| {
		controller.end(InputSource::Touch)
	});
	let _ = use_event_listener(node_ref, ev::touchcancel, move |_| {
		controller.end(InputSource::Touch)
	});

	view! { <canvas class="Sketchpad" node_ref=node_ref></canvas> }
}
