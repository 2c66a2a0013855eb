use leptos::prelude::*;

#[component]
pub fn ErrorList(#[prop(into)] errors: Signal<Vec<String>>) -> impl IntoView {
	view! {
		<ul class="ErrorList">
			{move || {
				errors
					.with(|errors| {
						errors.iter().map(|error| view! { <li>{error.clone()}</li> }).collect_view()
					})
			}}
		</ul>
	}
}
