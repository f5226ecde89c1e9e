use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::{Canvas, Div};
use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlElement, WheelEvent};

use super::config::ConceptMapConfig;
use super::listener::WindowListener;
use super::orchestrator::{Diagram, RenderHandle};
use super::types::Taxonomy;
use super::viewport::Viewport;

const ROW_STYLE: &str = "position: relative; display: flex; justify-content: center; \
	gap: 0.5rem; min-height: 2.5em; white-space: nowrap;";
const EDGE_STYLE: &str = "display: block;";

/// Five-row concept map for one taxonomy snapshot. Re-renders whenever `taxonomy` changes;
/// zoom is kept across snapshots.
#[component]
pub fn ConceptMap(
	#[prop(into)] taxonomy: Signal<Option<Taxonomy>>,
	/// Name of the taxonomy the snapshot came from, carried into navigation links.
	#[prop(into)]
	source: String,
	#[prop(optional)] config: ConceptMapConfig,
) -> impl IntoView {
	let row_refs: [NodeRef<Div>; 5] = std::array::from_fn(|_| NodeRef::new());
	let canvas_refs: [NodeRef<Canvas>; 4] = std::array::from_fn(|_| NodeRef::new());
	let viewport = RwSignal::new(Viewport::new(&config));
	let diagram: Rc<RefCell<Option<Diagram>>> = Rc::new(RefCell::new(None));
	let resize_listener = StoredValue::new_local(None::<WindowListener>);
	on_cleanup(move || {
		resize_listener.try_update_value(|listener| *listener = None);
	});

	Effect::new(move |_| {
		let Some(snapshot) = taxonomy.get() else {
			return;
		};
		let rows: Option<Vec<HtmlElement>> = row_refs
			.iter()
			.map(|r| r.get().map(HtmlElement::from))
			.collect();
		let canvases: Option<Vec<HtmlCanvasElement>> =
			canvas_refs.iter().map(|c| c.get()).collect();
		let (Some(rows), Some(canvases)) = (rows, canvases) else {
			return;
		};
		let (Ok(rows), Ok(canvases)) = (
			<[HtmlElement; 5]>::try_from(rows),
			<[HtmlCanvasElement; 4]>::try_from(canvases),
		) else {
			return;
		};

		let handle = diagram
			.borrow_mut()
			.get_or_insert_with(|| Diagram::new(rows, canvases, source.clone(), config.clone()))
			.render(&snapshot);
		schedule_paint(diagram.clone(), handle);

		if resize_listener.with_value(Option::is_none) {
			let diagram_resize = diagram.clone();
			resize_listener.set_value(WindowListener::new("resize", move || {
				if let Some(d) = diagram_resize.borrow_mut().as_mut() {
					d.repaint();
				}
			}));
		}
	});

	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		viewport.update(|v| {
			v.on_zoom_input(ev.delta_y());
		});
	};

	view! {
		<div class="concept-map" on:wheel=on_wheel>
			<div class="concept-map-diagram" style=move || viewport.get().style()>
				<div node_ref=row_refs[0] class="concept-map-row subparents" style=ROW_STYLE></div>
				<canvas node_ref=canvas_refs[0] class="concept-map-edges" style=EDGE_STYLE></canvas>
				<div node_ref=row_refs[1] class="concept-map-row parents" style=ROW_STYLE></div>
				<canvas node_ref=canvas_refs[1] class="concept-map-edges" style=EDGE_STYLE></canvas>
				<div node_ref=row_refs[2] class="concept-map-row focus" style=ROW_STYLE></div>
				<canvas node_ref=canvas_refs[2] class="concept-map-edges" style=EDGE_STYLE></canvas>
				<div node_ref=row_refs[3] class="concept-map-row children" style=ROW_STYLE></div>
				<canvas node_ref=canvas_refs[3] class="concept-map-edges" style=EDGE_STYLE></canvas>
				<div node_ref=row_refs[4] class="concept-map-row subchildren" style=ROW_STYLE></div>
			</div>
		</div>
	}
}

/// Defers measuring until the next animation frame, when the new rows have been laid out.
fn schedule_paint(diagram: Rc<RefCell<Option<Diagram>>>, handle: RenderHandle) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let cb = Closure::once_into_js(move || {
		if let Some(d) = diagram.borrow_mut().as_mut() {
			d.measure_and_paint(handle);
		}
	});
	if let Err(err) = window.request_animation_frame(cb.unchecked_ref::<js_sys::Function>()) {
		warn!("failed to schedule concept map paint: {:?}", err);
	}
}
