mod stroke;
pub use stroke::*;

mod interaction;
pub use interaction::*;

mod surface;
pub use surface::*;

mod raster;
pub use raster::*;

mod sketchpad;
pub use sketchpad::*;
