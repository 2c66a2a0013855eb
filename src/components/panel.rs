use leptos::prelude::*;
use thaw::{Body1, Card, CardHeader, CardPreview};

#[component]
pub fn Panel(
	#[prop(into)] title: String,
	#[prop(optional, into)] class: Option<String>,
	children: Children,
) -> impl IntoView {
	let class = match class {
		Some(class) => format!("Panel {class}"),
		None => "Panel".to_owned(),
	};
	view! {
		<Card class=class>
			<CardHeader>
				<Body1>
					<b>{title}</b>
				</Body1>
			</CardHeader>
			<CardPreview>{children()}</CardPreview>
		</Card>
	}
}
