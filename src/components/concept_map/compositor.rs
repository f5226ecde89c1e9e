//! Edge frames for one row gap and their off-screen painting.

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::config::ConceptMapConfig;
use super::matcher::{MeasuredRow, match_edges};
use super::types::Direction;

/// One straight edge in canvas coordinates, from `(x0, y0)` to `(x1, y1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct Segment {
	pub x0: f64,
	pub y0: f64,
	pub x1: f64,
	pub y1: f64,
}

/// A complete edge frame for the gap between two rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
	/// Canvas width: the wider of the two rows.
	pub width: f64,
	/// Canvas height: the row gap.
	pub height: f64,
	/// Stroked in order.
	pub segments: Vec<Segment>,
}

impl Frame {
	/// Sizes the frame to the wider row and routes every matched edge across the gap.
	/// The upper row touches `y = 0`, the lower row `y = height`.
	pub fn compose(
		upper: &MeasuredRow,
		lower: &MeasuredRow,
		direction: Direction,
		row_gap: f64,
	) -> Self {
		let (from, to, from_y, to_y) = match direction {
			Direction::Downward => (upper, lower, 0.0, row_gap),
			Direction::Upward => (lower, upper, row_gap, 0.0),
		};
		let segments = match_edges(&from.nodes, &to.nodes, direction)
			.into_iter()
			.map(|edge| Segment {
				x0: edge.from_x,
				y0: from_y,
				x1: edge.to_x,
				y1: to_y,
			})
			.collect();

		Self {
			width: upper.width.max(lower.width),
			height: row_gap,
			segments,
		}
	}

	/// True when nothing would be stroked.
	pub fn is_blank(&self) -> bool {
		self.segments.is_empty()
	}
}

/// Strokes `frame` off-screen, then resizes `target` and blits it in one draw.
/// Failures are logged and leave the target blank.
pub fn paint(target: &HtmlCanvasElement, frame: &Frame, config: &ConceptMapConfig) {
	if let Err(err) = try_paint(target, frame, config) {
		warn!("failed to paint concept map edges: {:?}", err);
	}
}

fn try_paint(
	target: &HtmlCanvasElement,
	frame: &Frame,
	config: &ConceptMapConfig,
) -> Result<(), JsValue> {
	let (w, h) = (frame.width.ceil() as u32, frame.height.ceil() as u32);
	let document = target
		.owner_document()
		.ok_or_else(|| JsValue::from_str("canvas has no owner document"))?;
	let offscreen: HtmlCanvasElement = document
		.create_element("canvas")?
		.dyn_into()
		.map_err(JsValue::from)?;
	offscreen.set_width(w);
	offscreen.set_height(h);

	let ctx = context_2d(&offscreen)?;
	ctx.set_stroke_style_str(&config.stroke_color);
	ctx.set_line_width(config.line_width);
	ctx.begin_path();
	for s in &frame.segments {
		ctx.move_to(s.x0, s.y0);
		ctx.line_to(s.x1, s.y1);
	}
	ctx.stroke();

	// Resizing clears the visible canvas, so it only ever shows whole frames.
	target.set_width(w);
	target.set_height(h);
	if w == 0 || h == 0 {
		return Ok(());
	}
	context_2d(target)?.draw_image_with_html_canvas_element(&offscreen, 0.0, 0.0)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
	canvas
		.get_context("2d")?
		.ok_or_else(|| JsValue::from_str("2d context unavailable"))?
		.dyn_into()
		.map_err(JsValue::from)
}
