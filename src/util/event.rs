use crate::engine::InputSource;
use glam::Vec2;

/// Suppresses the browser's default handling of `event` and reports it as handled.
///
/// Used on touch events so dragging a finger over the surface draws instead of scrolling.
pub fn prevent_default_and_false(event: &web_sys::Event) -> bool {
	event.prevent_default();
	false
}

/// An input event that can drive an interaction chain.
pub trait PointerLike {
	const SOURCE: InputSource;

	/// The primary contact point in client coordinates, if the event carries one.
	fn client_position(&self) -> Option<Vec2>;
}

impl PointerLike for web_sys::MouseEvent {
	const SOURCE: InputSource = InputSource::Mouse;

	fn client_position(&self) -> Option<Vec2> {
		Some(Vec2::new(self.client_x() as f32, self.client_y() as f32))
	}
}

impl PointerLike for web_sys::TouchEvent {
	const SOURCE: InputSource = InputSource::Touch;

	fn client_position(&self) -> Option<Vec2> {
		let touch = self.touches().get(0)?;
		Some(Vec2::new(touch.client_x() as f32, touch.client_y() as f32))
	}
}
