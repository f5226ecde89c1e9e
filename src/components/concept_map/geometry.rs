//! Node boxes read back from layout.

use web_sys::HtmlElement;

/// Horizontal extent of a laid-out node, relative to its row container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NodeBox {
	/// Distance from the row's left edge.
	pub offset_left: f64,
	/// Client width, padding included.
	pub width: f64,
}

impl NodeBox {
	pub fn new(offset_left: f64, width: f64) -> Self {
		Self { offset_left, width }
	}

	/// Horizontal midpoint, where edges attach.
	pub fn center(&self) -> f64 {
		self.offset_left + self.width / 2.0
	}
}

/// Reads the box of an attached element. Only meaningful once layout has settled.
pub fn measure(element: &HtmlElement) -> NodeBox {
	NodeBox::new(element.offset_left() as f64, element.client_width() as f64)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn center_is_offset_plus_half_width() {
		assert_eq!(NodeBox::new(40.0, 100.0).center(), 90.0);
		assert_eq!(NodeBox::new(0.0, 0.0).center(), 0.0);
		assert_eq!(NodeBox::new(12.0, 7.0).center(), 15.5);
	}
}
