use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use log::debug;
use thiserror::Error;

use crate::components::concept_map::wire::SearchResponse;
use crate::components::concept_map::{ConceptMap, NamedTaxonomy, WireError};

/// Canned backend responses keyed by search query.
const SAMPLE_RESPONSES: &str = include_str!("sample_response.json");
const DEFAULT_QUERY: &str = "machine learning";

#[derive(Clone, Debug, PartialEq, Error)]
#[error("{0}")]
struct LoadError(String);

impl From<WireError> for LoadError {
	fn from(err: WireError) -> Self {
		Self(err.to_string())
	}
}

/// Stand-in for the concept search backend: answers from the bundled responses.
fn search_concepts(query: &str) -> Result<Vec<NamedTaxonomy>, WireError> {
	let responses: BTreeMap<String, SearchResponse> = serde_json::from_str(SAMPLE_RESPONSES)?;
	let query = query.trim();
	match responses.into_iter().find(|(key, _)| key.eq_ignore_ascii_case(query)) {
		Some((_, response)) => response.into_taxonomies(),
		None => Ok(Vec::new()),
	}
}

/// Keeps only the taxonomy the user navigated from, when it has a result.
fn select_source(taxonomies: Vec<NamedTaxonomy>, source: Option<&str>) -> Vec<NamedTaxonomy> {
	match source {
		Some(source) if taxonomies.iter().any(|t| t.name == source) => {
			taxonomies.into_iter().filter(|t| t.name == source).collect()
		}
		_ => taxonomies,
	}
}

/// Search page: one concept map per taxonomy that knows the query.
#[component]
pub fn Home() -> impl IntoView {
	let query = use_query_map();
	let search = Memo::new(move |_| {
		query
			.with(|q| q.get("search_query"))
			.unwrap_or_else(|| DEFAULT_QUERY.to_string())
	});
	let results = Memo::new(move |_| -> Result<Vec<NamedTaxonomy>, LoadError> {
		let source = query.with(|q| q.get("source_taxonomy"));
		let taxonomies = search_concepts(&search.get())?;
		debug!("{} taxonomies matched {:?}", taxonomies.len(), search.get());
		Ok(select_source(taxonomies, source.as_deref()))
	});
	let names = Memo::new(move |_| {
		results
			.get()
			.map(|found| found.into_iter().map(|t| t.name).collect::<Vec<_>>())
			.unwrap_or_default()
	});

	let maps = move || -> Result<_, LoadError> {
		let found = results.get()?;
		if found.is_empty() {
			return Ok(view! {
				<p class="notification">"No concept found for \"" {search.get()} "\"."</p>
			}
			.into_any());
		}
		Ok(view! {
			<For each=move || names.get() key=|name| name.clone() let:name>
				{
					let source = name.clone();
					let taxonomy = Signal::derive(move || {
						results
							.get()
							.ok()
							.and_then(|found| found.into_iter().find(|t| t.name == name))
							.map(|t| t.taxonomy)
					});
					view! {
						<section class="box">
							<h2 class="subtitle">{source.clone()}</h2>
							<ConceptMap taxonomy=taxonomy source=source />
						</section>
					}
				}
			</For>
		}
		.into_any())
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="concept-search">
				<h1 class="title">{move || search.get()}</h1>
				<p class="subtitle">"Click a concept to re-centre the map. Scroll to zoom."</p>
				{maps}
			</div>
		</ErrorBoundary>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::concept_map::ConceptId;

	#[test]
	fn bundled_responses_decode() {
		let found = search_concepts("Machine Learning").unwrap();
		assert!(!found.is_empty());
		for named in &found {
			assert_eq!(named.taxonomy.concept.text, "machine learning");
		}
	}

	#[test]
	fn every_bundled_parent_points_at_its_focus() {
		let responses: BTreeMap<String, SearchResponse> =
			serde_json::from_str(SAMPLE_RESPONSES).unwrap();
		for (query, response) in responses {
			for named in response.into_taxonomies().unwrap() {
				let focus: ConceptId = named.taxonomy.concept.id;
				let name = &named.name;
				for parent in &named.taxonomy.parents {
					assert!(parent.children_ids.contains(&focus), "{query}/{name}: {}", parent.text);
				}
				for child in &named.taxonomy.children {
					assert!(child.parent_ids.contains(&focus), "{query}/{name}: {}", child.text);
				}
			}
		}
	}

	#[test]
	fn unknown_query_finds_nothing() {
		assert!(search_concepts("basket weaving").unwrap().is_empty());
	}

	#[test]
	fn source_filter_falls_back_to_all() {
		let found = search_concepts(DEFAULT_QUERY).unwrap();
		let total = found.len();
		assert_eq!(select_source(found.clone(), Some("CSO")).len(), 1);
		assert_eq!(select_source(found.clone(), Some("nope")).len(), total);
		assert_eq!(select_source(found, None).len(), total);
	}
}
