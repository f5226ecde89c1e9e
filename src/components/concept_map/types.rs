//! Taxonomy snapshots and the row layout of the map.

use std::collections::BTreeSet;
use std::fmt;

/// Stable integer id of a taxonomy concept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConceptId(pub i64);

impl fmt::Display for ConceptId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Ids a concept declares as its parents or children. Only used for edge matching.
pub type IdSet = BTreeSet<ConceptId>;

/// A taxonomy node as shown in one row of the map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Concept {
	/// Unique within one taxonomy snapshot.
	pub id: ConceptId,
	/// Display label, also the search query its link navigates to.
	pub text: String,
	/// Concepts this one declares as parents; matched when painting upward.
	pub parent_ids: IdSet,
	/// Concepts this one declares as children; matched when painting downward.
	pub children_ids: IdSet,
}

impl Concept {
	/// A concept with no declared relatives.
	pub fn new(id: i64, text: impl Into<String>) -> Self {
		Self {
			id: ConceptId(id),
			text: text.into(),
			parent_ids: IdSet::new(),
			children_ids: IdSet::new(),
		}
	}

	pub fn with_parents(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
		self.parent_ids.extend(ids.into_iter().map(ConceptId));
		self
	}

	pub fn with_children(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
		self.children_ids.extend(ids.into_iter().map(ConceptId));
		self
	}
}

/// One focus concept with two levels of ancestors and descendants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Taxonomy {
	/// The focus concept, alone in the middle row.
	pub concept: Concept,
	/// Direct parents of the focus.
	pub parents: Vec<Concept>,
	/// Parents of the parents.
	pub subparents: Vec<Concept>,
	/// Direct children of the focus.
	pub children: Vec<Concept>,
	/// Children of the children.
	pub subchildren: Vec<Concept>,
}

impl Taxonomy {
	/// A snapshot holding only the focus concept.
	pub fn focused(concept: Concept) -> Self {
		Self {
			concept,
			parents: Vec::new(),
			subparents: Vec::new(),
			children: Vec::new(),
			subchildren: Vec::new(),
		}
	}

	/// Concepts of one row, in display order.
	pub fn row(&self, kind: RowKind) -> &[Concept] {
		match kind {
			RowKind::SubParents => &self.subparents,
			RowKind::Parents => &self.parents,
			RowKind::Focus => std::slice::from_ref(&self.concept),
			RowKind::Children => &self.children,
			RowKind::SubChildren => &self.subchildren,
		}
	}
}

/// A snapshot tagged with the taxonomy that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedTaxonomy {
	/// Source taxonomy, e.g. `CSO`; carried into navigation links.
	pub name: String,
	/// The snapshot itself.
	pub taxonomy: Taxonomy,
}

/// Hierarchy level of a row, listed top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum RowKind {
	SubParents,
	Parents,
	Focus,
	Children,
	SubChildren,
}

impl RowKind {
	/// Rows top to bottom.
	pub const ALL: [RowKind; 5] = [
		RowKind::SubParents,
		RowKind::Parents,
		RowKind::Focus,
		RowKind::Children,
		RowKind::SubChildren,
	];

	/// Position in [`RowKind::ALL`].
	pub fn index(self) -> usize {
		self as usize
	}

	/// Button classes; sub rows get less visual weight than direct relatives.
	pub fn class(self) -> &'static str {
		match self {
			RowKind::Focus => "button is-link is-medium",
			RowKind::Parents | RowKind::Children => "button",
			RowKind::SubParents | RowKind::SubChildren => "button is-small",
		}
	}
}

/// Which relationship set of the from-row is consulted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
	/// From-row is above the to-row; reads `children_ids`.
	Downward,
	/// From-row is below the to-row; reads `parent_ids`.
	Upward,
}

/// The gap between two adjacent rows, one canvas each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum RowPair {
	SubParentsParents,
	ParentsFocus,
	FocusChildren,
	ChildrenSubChildren,
}

impl RowPair {
	/// Fixed paint order.
	pub const PAINT_ORDER: [RowPair; 4] = [
		RowPair::SubParentsParents,
		RowPair::ParentsFocus,
		RowPair::FocusChildren,
		RowPair::ChildrenSubChildren,
	];

	/// Canvas slot, counting gaps from the top.
	pub fn index(self) -> usize {
		self as usize
	}

	/// `(upper, lower)` rows bounding this gap.
	pub fn rows(self) -> (RowKind, RowKind) {
		match self {
			RowPair::SubParentsParents => (RowKind::SubParents, RowKind::Parents),
			RowPair::ParentsFocus => (RowKind::Parents, RowKind::Focus),
			RowPair::FocusChildren => (RowKind::Focus, RowKind::Children),
			RowPair::ChildrenSubChildren => (RowKind::Children, RowKind::SubChildren),
		}
	}

	/// Ancestor side matches down from the upper row, descendant side up from the lower row.
	pub fn direction(self) -> Direction {
		match self {
			RowPair::SubParentsParents | RowPair::ParentsFocus => Direction::Downward,
			RowPair::FocusChildren | RowPair::ChildrenSubChildren => Direction::Upward,
		}
	}
}
