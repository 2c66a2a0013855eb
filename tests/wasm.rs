#![cfg(target_arch = "wasm32")]

use glam::vec2;
use leptos::prelude::*;
use sketchpad::engine::*;
use sketchpad::util::{prevent_default_and_false, PointerLike};
use sketchpad::SketchpadController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

// https://rustwasm.github.io/wasm-bindgen/wasm-bindgen-test/browsers.html
wasm_bindgen_test_configure!(run_in_browser);

fn create_canvas() -> web_sys::HtmlCanvasElement {
	web_sys::window()
		.and_then(|window| window.document())
		.and_then(|document| document.create_element("canvas").ok())
		.and_then(|element| element.dyn_into::<web_sys::HtmlCanvasElement>().ok())
		.expect("failed to create canvas")
}

fn canvas_surface() -> CanvasSurface {
	CanvasSurface::new(create_canvas()).expect("2d context")
}

/// A canvas already bound to another context kind, so asking it for "2d" yields null.
fn canvas_without_2d() -> web_sys::HtmlCanvasElement {
	let canvas = create_canvas();
	canvas
		.get_context("bitmaprenderer")
		.expect("getContext threw")
		.expect("bitmaprenderer context");
	canvas
}

fn blank_snapshot(fill: Option<&str>) -> String {
	let mut surface = canvas_surface();
	surface.resize(200, 100);
	if let Some(color) = fill {
		surface.fill(color);
	}
	surface.to_data_url().unwrap()
}

fn initialize() -> (Sketchpad<CanvasSurface>, Rc<RefCell<Vec<String>>>) {
	let published = Rc::new(RefCell::new(Vec::new()));
	let pad = {
		let published = published.clone();
		Sketchpad::initialize(canvas_surface(), SketchpadConfig::default(), move |url| {
			published.borrow_mut().push(url)
		})
		.unwrap()
	};
	(pad, published)
}

#[wasm_bindgen_test]
fn test_initialize() {
	let (pad, published) = initialize();
	assert_eq!(pad.surface().size(), (200, 100));
	assert_eq!(pad.surface().canvas().width(), 200);
	assert_eq!(published.borrow().as_slice(), [blank_snapshot(Some("white"))]);
	assert!(published.borrow()[0].starts_with("data:image/png;base64,"));
}

#[wasm_bindgen_test]
fn test_draw_and_clear() {
	let (mut pad, published) = initialize();
	let blank = published.borrow()[0].clone();

	pad.begin(InputSource::Mouse);
	let origin = pad.surface().bounding_rect().origin();
	assert!(!pad.sample(InputSource::Mouse, origin + vec2(10.0, 10.0)));
	assert!(pad.sample(InputSource::Mouse, origin + vec2(20.0, 20.0)));
	assert_eq!(published.borrow().len(), 2);
	assert_ne!(published.borrow()[1], blank);

	pad.set_color("white");
	pad.clear();
	assert_eq!(pad.style().color, "black");
	assert_eq!(published.borrow().len(), 3);
	assert_eq!(published.borrow()[2], blank_snapshot(None));
}

#[wasm_bindgen_test]
fn test_prevent_default_and_false() {
	let init = web_sys::EventInit::new();
	init.set_cancelable(true);
	let event = web_sys::Event::new_with_event_init_dict("touchmove", &init).unwrap();
	assert!(!event.default_prevented());
	assert!(!prevent_default_and_false(&event));
	assert!(event.default_prevented());
}

#[wasm_bindgen_test]
fn test_mouse_client_position() {
	let init = web_sys::MouseEventInit::new();
	init.set_client_x(12);
	init.set_client_y(34);
	let event = web_sys::MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
	assert_eq!(event.client_position(), Some(vec2(12.0, 34.0)));
}

#[wasm_bindgen_test]
fn test_touch_without_contacts_has_no_position() {
	let init = web_sys::TouchEventInit::new();
	init.set_cancelable(true);
	let event = web_sys::TouchEvent::new_with_event_init_dict("touchmove", &init).unwrap();
	assert_eq!(event.touches().length(), 0);
	assert_eq!(event.client_position(), None);
	assert!(!prevent_default_and_false(&event));
	assert!(event.default_prevented());
}

#[wasm_bindgen_test]
fn test_controller_ignores_operations_before_mount() {
	let controller = SketchpadController::new();
	controller.set_color("red");
	controller.set_line_width(9.0);
	controller.clear();
	assert!(!controller.is_ready());
	assert_eq!(controller.snapshot().get_untracked(), "");
	assert_eq!(controller.style().get_untracked(), StrokeStyle::default());
	assert!(controller.errors().get_untracked().is_empty());
}

#[wasm_bindgen_test]
fn test_controller_initialize() {
	let controller = SketchpadController::new();
	assert!(controller.initialize(create_canvas(), SketchpadConfig::default()));
	assert!(controller.is_ready());
	assert_eq!(controller.snapshot().get_untracked(), blank_snapshot(Some("white")));

	controller.set_color("white");
	controller.clear();
	assert_eq!(controller.style().get_untracked().color, "black");
	assert_eq!(controller.snapshot().get_untracked(), blank_snapshot(None));
}

#[wasm_bindgen_test]
fn test_controller_records_setup_failure() {
	let controller = SketchpadController::new();
	assert!(!controller.initialize(canvas_without_2d(), SketchpadConfig::default()));
	assert!(!controller.is_ready());
	assert_eq!(
		controller.errors().get_untracked(),
		[SurfaceError::ContextUnavailable.to_string()]
	);

	controller.set_color("red");
	controller.clear();
	assert_eq!(controller.snapshot().get_untracked(), "");
	assert_eq!(controller.style().get_untracked(), StrokeStyle::default());
}
