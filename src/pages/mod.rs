use crate::components::*;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::hooks::use_location;
use leptos_router::components::A;
use thaw::Button;

/// Pen colors offered on the home page. White paints over strokes, so it doubles as an eraser.
const PALETTE: [&str; 5] = ["black", "red", "blue", "green", "white"];

#[component]
pub fn Home() -> impl IntoView {
	let pad = SketchpadController::new();
	let snapshot = pad.snapshot();
	let style = pad.style();

	let swatches = PALETTE
		.into_iter()
		.map(|color| {
			let selected = move || style.with(|style| style.color == color);
			view! {
				<button
					class="Swatch"
					class:selected=selected
					style:background-color=color
					title=color
					on:click=move |_| pad.set_color(color)
				></button>
			}
		})
		.collect_view();

	view! {
		<Title text="Home"/>
		<div class="Home">
			<Panel title="Sketch">
				<Sketchpad controller=pad/>
				<ErrorList errors=pad.errors()/>
			</Panel>
			<Panel title="Pen" class="Pen">
				<label>
					"Width"
					<input
						type="range"
						min="1"
						max="20"
						step="1"
						prop:value=move || style.with(|style| style.line_width)
						on:input=move |ev| {
							pad.set_line_width(event_target_value(&ev).parse().unwrap_or(f64::NAN))
						}
					/>
				</label>
				<div class="Palette">{swatches}</div>
				<Button on_click=move |_| pad.clear()>"Clear"</Button>
			</Panel>
			<Panel title="Preview">
				<Show when=move || pad.is_ready() fallback=|| view! { <p>"No canvas yet."</p> }>
					<img class="Preview" src=move || snapshot.get() alt="Sketch preview"/>
				</Show>
				<a
					class="Save"
					class:disabled=move || snapshot.with(String::is_empty)
					href=move || snapshot.get()
					download="sketch.png"
				>
					"Save"
				</a>
			</Panel>
		</div>
	}
}

#[component]
pub fn NotFound() -> impl IntoView {
	let path = use_location().pathname;

	view! {
		<Title text="Not found"/>
		<div class="NotFound">
			<div>{move || format!("Not found: {}", path.get())}</div>
			<A href="/">"Return home"</A>
		</div>
	}
}
