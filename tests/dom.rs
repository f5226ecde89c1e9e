#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
	use std::cell::Cell;
	use std::rc::Rc;

	use concept_map::compositor::{Frame, paint};
	use concept_map::listener::WindowListener;
	use concept_map::orchestrator::{Diagram, Phase};
	use concept_map::renderer::render_row;
	use concept_map::{Concept, ConceptMapConfig, Direction, RowKind, Taxonomy};
	use wasm_bindgen::JsCast;
	use wasm_bindgen_test::*;
	use web_sys::{Event, HtmlCanvasElement, HtmlElement};

	wasm_bindgen_test_configure!(run_in_browser);

	fn element<T: JsCast>(tag: &str) -> T {
		let document = web_sys::window().unwrap().document().unwrap();
		let el = document.create_element(tag).unwrap();
		document.body().unwrap().append_child(&el).unwrap();
		el.dyn_into().unwrap()
	}

	fn row() -> HtmlElement {
		let row: HtmlElement = element("div");
		row.style().set_property("position", "relative").unwrap();
		row
	}

	fn scenario() -> Taxonomy {
		Taxonomy {
			concept: Concept::new(1, "machine learning").with_parents([2]).with_children([3]),
			parents: vec![Concept::new(2, "artificial intelligence").with_children([1])],
			subparents: vec![Concept::new(9, "philosophy").with_children([8])],
			children: vec![Concept::new(3, "deep learning").with_parents([1])],
			subchildren: Vec::new(),
		}
	}

	#[wasm_bindgen_test]
	fn render_row_replaces_contents_in_order() {
		let container = row();
		container.set_inner_html("<span>stale</span>");
		let concepts = vec![Concept::new(4, "robotics"), Concept::new(5, "data mining")];
		let rendered = render_row(&container, &concepts, RowKind::Children, "CSO");

		assert_eq!(rendered.nodes.len(), 2);
		assert_eq!(container.child_element_count(), 2);
		let first = container.first_element_child().unwrap();
		assert_eq!(first.tag_name(), "A");
		assert_eq!(first.text_content().unwrap(), "robotics");
		assert_eq!(first.class_name(), "button");
		assert!(
			first
				.get_attribute("href")
				.unwrap()
				.ends_with("?search_query=robotics&source=taxonomy&source_taxonomy=CSO")
		);
		assert_eq!(rendered.nodes[1].id, concepts[1].id);
	}

	#[wasm_bindgen_test]
	fn paint_sizes_canvas_to_frame() {
		let canvas: HtmlCanvasElement = element("canvas");
		let empty = Default::default();
		let frame = Frame::compose(&empty, &empty, Direction::Downward, 30.0);
		paint(&canvas, &frame, &ConceptMapConfig::default());
		assert_eq!(canvas.width(), 0);
		assert_eq!(canvas.height(), 30);
	}

	#[wasm_bindgen_test]
	fn diagram_paints_once_layout_settles() {
		let rows = [row(), row(), row(), row(), row()];
		let canvases: [HtmlCanvasElement; 4] = std::array::from_fn(|_| element("canvas"));
		let config = ConceptMapConfig::default();
		let mut diagram = Diagram::new(rows.clone(), canvases.clone(), "CSO", config);

		let stale = diagram.render(&scenario());
		let handle = diagram.render(&scenario());
		assert_eq!(diagram.phase(), Phase::AwaitingLayout);
		assert!(!diagram.measure_and_paint(stale));
		assert!(diagram.measure_and_paint(handle));
		assert_eq!(diagram.phase(), Phase::Idle);

		assert_eq!(rows[RowKind::Focus.index()].child_element_count(), 1);
		assert_eq!(rows[RowKind::SubChildren.index()].child_element_count(), 0);
		for canvas in &canvases {
			assert_eq!(canvas.height(), 30);
			assert_eq!(canvas.width(), rows[0].client_width() as u32);
		}
	}

	#[wasm_bindgen_test]
	fn dropped_listener_stops_firing() {
		let window = web_sys::window().unwrap();
		let resize = || window.dispatch_event(&Event::new("resize").unwrap()).unwrap();
		let hits = Rc::new(Cell::new(0));
		let counter = hits.clone();
		let listener = WindowListener::new("resize", move || counter.set(counter.get() + 1)).unwrap();

		resize();
		assert_eq!(hits.get(), 1);
		drop(listener);
		resize();
		assert_eq!(hits.get(), 1);
	}
}
