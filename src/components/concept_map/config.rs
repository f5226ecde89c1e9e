//! Tunables for a concept map.

/// Presentation constants for a concept map.
#[derive(Clone, Debug, PartialEq)]
pub struct ConceptMapConfig {
	/// Height of the canvas between two stacked rows.
	pub row_gap: f64,
	/// CSS color of the edge strokes.
	pub stroke_color: String,
	/// Stroke width in canvas pixels.
	pub line_width: f64,
	/// Lower zoom bound.
	pub min_zoom: f64,
	/// Upper zoom bound, also the initial scale.
	pub max_zoom: f64,
	/// Wheel delta units per unit of scale.
	pub zoom_divisor: f64,
}

impl Default for ConceptMapConfig {
	fn default() -> Self {
		Self {
			row_gap: 30.0,
			stroke_color: "#ababab".into(),
			line_width: 1.0,
			min_zoom: 0.25,
			max_zoom: 1.0,
			zoom_divisor: 100.0,
		}
	}
}
