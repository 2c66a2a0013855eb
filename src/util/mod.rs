mod result_ext;
pub use result_ext::*;

mod data_url;
pub use data_url::*;

mod event;
pub use event::*;

#[derive(thiserror::Error, Debug)]
#[error("{0}")]
pub struct JsError(String);

impl From<wasm_bindgen::JsValue> for JsError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		JsError(format!("{:?}", value))
	}
}
