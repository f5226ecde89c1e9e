//! Concept links in row containers.

use log::warn;
use url::form_urlencoded;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlAnchorElement, HtmlElement};

use super::geometry::measure;
use super::matcher::{MeasuredNode, MeasuredRow};
use super::types::{Concept, ConceptId, IdSet, RowKind};

/// A concept's element in the document, bound to its relationship sets.
#[derive(Clone, Debug)]
pub struct RenderedNode {
	/// Id of the rendered concept.
	pub id: ConceptId,
	/// Copied from the concept at render time.
	pub parent_ids: IdSet,
	/// Copied from the concept at render time.
	pub children_ids: IdSet,
	/// The `<a>` link, a direct child of the row container.
	pub element: HtmlElement,
}

impl RenderedNode {
	/// Snapshot for edge matching; reads live layout.
	pub fn measure(&self) -> MeasuredNode {
		MeasuredNode {
			id: self.id,
			parent_ids: self.parent_ids.clone(),
			children_ids: self.children_ids.clone(),
			bounds: measure(&self.element),
		}
	}
}

/// A row container and the nodes last rendered into it.
#[derive(Clone, Debug)]
pub struct RenderedRow {
	/// The row `<div>` owned by the component.
	pub container: HtmlElement,
	/// Links in concept order; failed elements are left out.
	pub nodes: Vec<RenderedNode>,
}

impl RenderedRow {
	/// Snapshot of the whole row; reads live layout.
	pub fn measure(&self) -> MeasuredRow {
		MeasuredRow {
			width: self.container.client_width() as f64,
			nodes: self.nodes.iter().map(RenderedNode::measure).collect(),
		}
	}
}

/// Query string that re-runs the search centred on `text` within taxonomy `source`.
pub fn search_href(text: &str, source: &str) -> String {
	let query = form_urlencoded::Serializer::new(String::new())
		.append_pair("search_query", text)
		.append_pair("source", "taxonomy")
		.append_pair("source_taxonomy", source)
		.finish();
	format!("?{query}")
}

/// Replaces the contents of `container` with one link per concept, in input order.
/// The new nodes have no valid geometry until the next layout pass.
pub fn render_row(
	container: &HtmlElement,
	concepts: &[Concept],
	kind: RowKind,
	source: &str,
) -> RenderedRow {
	container.set_text_content(None);
	let nodes = concepts
		.iter()
		.filter_map(|concept| match render_node(container, concept, kind, source) {
			Ok(node) => Some(node),
			Err(err) => {
				warn!("failed to render concept {} ({}): {:?}", concept.id, concept.text, err);
				None
			}
		})
		.collect();
	RenderedRow {
		container: container.clone(),
		nodes,
	}
}

fn render_node(
	container: &HtmlElement,
	concept: &Concept,
	kind: RowKind,
	source: &str,
) -> Result<RenderedNode, JsValue> {
	let document = container
		.owner_document()
		.ok_or_else(|| JsValue::from_str("row has no owner document"))?;
	let anchor: HtmlAnchorElement = document
		.create_element("a")?
		.dyn_into()
		.map_err(JsValue::from)?;
	anchor.set_href(&search_href(&concept.text, source));
	anchor.set_class_name(kind.class());
	anchor.set_text_content(Some(&concept.text));
	container.append_child(&anchor)?;

	Ok(RenderedNode {
		id: concept.id,
		parent_ids: concept.parent_ids.clone(),
		children_ids: concept.children_ids.clone(),
		element: anchor.into(),
	})
}
