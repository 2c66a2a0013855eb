mod sketchpad;
pub use sketchpad::*;

mod panel;
pub use panel::*;

mod fallback;
pub use fallback::*;
