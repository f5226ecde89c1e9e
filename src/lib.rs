//! Taxonomy concept map, a Leptos CSR app.
//!
//! The single search route reads `search_query` and `source_taxonomy` from the
//! query string and shows one five-row [`ConceptMap`] per matching taxonomy.
//! Clicking a concept navigates back to the same route centred on it.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

mod components;
mod pages;

pub use components::concept_map::*;

use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Routes `log` output to the browser console at debug level and installs the panic hook.
pub fn init_logging() {
	// Errs only when a logger is already installed.
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("concept map logging initialized");
}

/// Root component: document head plus the route table. `/?search_query=…&source_taxonomy=…`
/// renders the search page; anything else falls through to the not-found page.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		<Title text="Concept Map" />

		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
