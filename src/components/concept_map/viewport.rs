//! Wheel zoom.

use super::config::ConceptMapConfig;

/// Zoom applied to the whole diagram. Survives reloads; owned by one diagram.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	scale: f64,
	min: f64,
	max: f64,
	divisor: f64,
}

impl Viewport {
	/// Unzoomed viewport with bounds taken from `config`.
	pub fn new(config: &ConceptMapConfig) -> Self {
		Self {
			scale: config.max_zoom,
			min: config.min_zoom,
			max: config.max_zoom,
			divisor: config.zoom_divisor,
		}
	}

	/// Current scale factor.
	pub fn scale(&self) -> f64 {
		self.scale
	}

	/// Adds `delta / divisor` to the scale and clamps it.
	pub fn on_zoom_input(&mut self, delta: f64) -> f64 {
		if delta.is_finite() {
			self.scale = (self.scale + delta / self.divisor).clamp(self.min, self.max);
		}
		self.scale
	}

	/// Inline style for the diagram container.
	pub fn style(&self) -> String {
		format!("transform: scale({}); transform-origin: top center;", self.scale)
	}
}

impl Default for Viewport {
	fn default() -> Self {
		Self::new(&ConceptMapConfig::default())
	}
}
