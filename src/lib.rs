pub mod util;

mod components;
pub use components::{Sketchpad, SketchpadController};

pub mod engine;
pub mod geom;
mod pages;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light"/>

		<Title formatter=|page| format!("Sketchpad - {page}")/>

		// Inject metadata in the <head> tag.
		<Meta charset="UTF-8"/>
		<Meta name="viewport" content="width=device-width, initial-scale=1.0"/>

		<thaw::ConfigProvider>
			<Router>
				<Routes fallback=pages::NotFound>
					<Route path=path!("/") view=pages::Home/>
				</Routes>
			</Router>
		</thaw::ConfigProvider>
	}
}
