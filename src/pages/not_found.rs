use leptos::prelude::*;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! { <h1>"No concept map lives here."</h1> <a href="/">"Back to search"</a> }
}
