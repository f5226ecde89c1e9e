//! Drives one reload: render the rows, wait for layout, then measure and paint.

use log::debug;
use web_sys::{HtmlCanvasElement, HtmlElement};

use super::compositor::{self, Frame};
use super::config::ConceptMapConfig;
use super::matcher::MeasuredRow;
use super::renderer::{RenderedRow, render_row};
use super::types::{RowKind, RowPair, Taxonomy};

/// Where a diagram is in its reload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	/// Rows and edges are current.
	Idle,
	/// Rows are being replaced.
	Rendering,
	/// Rows are in the document but the browser has not laid them out yet.
	AwaitingLayout,
	/// Edges are being measured and drawn.
	Painting,
}

/// Identifies one reload. Only the most recent ticket may advance the cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReloadTicket(u64);

/// Reload state machine. A newer reload supersedes any in flight.
#[derive(Clone, Debug)]
pub struct ReloadCycle {
	phase: Phase,
	generation: u64,
}

impl Default for ReloadCycle {
	fn default() -> Self {
		Self {
			phase: Phase::Idle,
			generation: 0,
		}
	}
}

impl ReloadCycle {
	/// Current phase.
	pub fn phase(&self) -> Phase {
		self.phase
	}

	/// Whether `ticket` belongs to the latest reload.
	pub fn is_current(&self, ticket: ReloadTicket) -> bool {
		ticket.0 == self.generation
	}

	/// Enters `Rendering` from any phase, invalidating earlier tickets.
	pub fn begin(&mut self) -> ReloadTicket {
		self.generation += 1;
		self.phase = Phase::Rendering;
		ReloadTicket(self.generation)
	}

	/// `Rendering` → `AwaitingLayout`.
	pub fn rendered(&mut self, ticket: ReloadTicket) -> bool {
		self.advance(ticket, Phase::Rendering, Phase::AwaitingLayout)
	}

	/// `AwaitingLayout` → `Painting`.
	pub fn layout_settled(&mut self, ticket: ReloadTicket) -> bool {
		self.advance(ticket, Phase::AwaitingLayout, Phase::Painting)
	}

	/// `Painting` → `Idle`.
	pub fn painted(&mut self, ticket: ReloadTicket) -> bool {
		self.advance(ticket, Phase::Painting, Phase::Idle)
	}

	fn advance(&mut self, ticket: ReloadTicket, from: Phase, to: Phase) -> bool {
		if !self.is_current(ticket) || self.phase != from {
			return false;
		}
		self.phase = to;
		true
	}
}

/// Returned by [`Diagram::render`]; hand it back once layout has settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct RenderHandle {
	ticket: ReloadTicket,
}

/// DOM anchors of one concept map: five row containers and the four canvases between them.
pub struct Diagram {
	rows: [HtmlElement; 5],
	canvases: [HtmlCanvasElement; 4],
	source: String,
	config: ConceptMapConfig,
	cycle: ReloadCycle,
	rendered: Option<Vec<RenderedRow>>,
}

impl Diagram {
	/// `rows` in [`RowKind::ALL`] order, `canvases` in [`RowPair::PAINT_ORDER`] order.
	pub fn new(
		rows: [HtmlElement; 5],
		canvases: [HtmlCanvasElement; 4],
		source: impl Into<String>,
		config: ConceptMapConfig,
	) -> Self {
		Self {
			rows,
			canvases,
			source: source.into(),
			config,
			cycle: ReloadCycle::default(),
			rendered: None,
		}
	}

	/// Phase of the current reload.
	pub fn phase(&self) -> Phase {
		self.cycle.phase()
	}

	/// Renders all five rows. Geometry is not valid until the host's next layout.
	pub fn render(&mut self, taxonomy: &Taxonomy) -> RenderHandle {
		let ticket = self.cycle.begin();
		debug!(
			"rendering concept map for {:?} ({}), reload {:?}",
			taxonomy.concept.text, self.source, ticket
		);
		let rendered = RowKind::ALL
			.iter()
			.map(|&kind| {
				let container = &self.rows[kind.index()];
				render_row(container, taxonomy.row(kind), kind, &self.source)
			})
			.collect();
		self.rendered = Some(rendered);
		self.cycle.rendered(ticket);
		RenderHandle { ticket }
	}

	/// Measures the rendered rows and paints every gap. Stale handles are ignored.
	pub fn measure_and_paint(&mut self, handle: RenderHandle) -> bool {
		if !self.cycle.layout_settled(handle.ticket) {
			debug!("dropping stale concept map paint {:?}", handle.ticket);
			return false;
		}
		self.paint_all();
		self.cycle.painted(handle.ticket)
	}

	/// Repaints the current rows after a reflow, without re-rendering them.
	pub fn repaint(&mut self) {
		if self.cycle.phase() == Phase::Idle {
			self.paint_all();
		}
	}

	fn paint_all(&self) {
		let Some(rendered) = &self.rendered else {
			return;
		};
		let measured: Vec<MeasuredRow> = rendered.iter().map(RenderedRow::measure).collect();
		for pair in RowPair::PAINT_ORDER {
			let (upper, lower) = pair.rows();
			let frame = Frame::compose(
				&measured[upper.index()],
				&measured[lower.index()],
				pair.direction(),
				self.config.row_gap,
			);
			compositor::paint(&self.canvases[pair.index()], &frame, &self.config);
		}
	}
}
