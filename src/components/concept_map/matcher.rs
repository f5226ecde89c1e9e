//! Pairs rendered nodes of adjacent rows by their declared relationships.

use super::geometry::NodeBox;
use super::types::{ConceptId, Direction, IdSet};

/// Per-draw snapshot of a rendered node.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasuredNode {
	/// Id of the rendered concept.
	pub id: ConceptId,
	/// Copied from the concept.
	pub parent_ids: IdSet,
	/// Copied from the concept.
	pub children_ids: IdSet,
	/// Box at measurement time.
	pub bounds: NodeBox,
}

impl MeasuredNode {
	fn relatives(&self, direction: Direction) -> &IdSet {
		match direction {
			Direction::Downward => &self.children_ids,
			Direction::Upward => &self.parent_ids,
		}
	}
}

/// Per-draw snapshot of a row: its container width and nodes in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeasuredRow {
	/// Client width of the row container.
	pub width: f64,
	/// Nodes in render order.
	pub nodes: Vec<MeasuredNode>,
}

/// Horizontal centers of the two ends of one edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
	/// Center of the from-row node.
	pub from_x: f64,
	/// Center of the to-row node.
	pub to_x: f64,
}

/// Every `(f, t)` where `t.id` is in `f`'s relationship set for `direction`,
/// in from-row order then to-row order. Multiple matches per node are all kept.
pub fn match_edges(
	from: &[MeasuredNode],
	to: &[MeasuredNode],
	direction: Direction,
) -> Vec<Edge> {
	let mut edges = Vec::new();
	for f in from {
		let relatives = f.relatives(direction);
		if relatives.is_empty() {
			continue;
		}
		let from_x = f.bounds.center();
		edges.extend(
			to.iter()
				.filter(|t| relatives.contains(&t.id))
				.map(|t| Edge {
					from_x,
					to_x: t.bounds.center(),
				}),
		);
	}
	edges
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn node(id: i64, parents: &[i64], children: &[i64], left: f64) -> MeasuredNode {
		MeasuredNode {
			id: ConceptId(id),
			parent_ids: parents.iter().copied().map(ConceptId).collect(),
			children_ids: children.iter().copied().map(ConceptId).collect(),
			bounds: NodeBox::new(left, 20.0),
		}
	}

	fn pairs(edges: &[Edge]) -> Vec<(f64, f64)> {
		edges.iter().map(|e| (e.from_x, e.to_x)).collect()
	}

	#[test]
	fn downward_uses_children_ids() {
		let parents = [node(2, &[], &[1], 0.0)];
		let focus = [node(1, &[], &[], 100.0)];
		let edges = match_edges(&parents, &focus, Direction::Downward);
		assert_eq!(pairs(&edges), vec![(10.0, 110.0)]);
		assert!(match_edges(&parents, &focus, Direction::Upward).is_empty());
	}

	#[test]
	fn one_node_matches_many_without_dedup() {
		let focus = [node(1, &[], &[], 50.0)];
		let children = [node(3, &[1], &[], 0.0), node(4, &[1], &[], 100.0)];
		let edges = match_edges(&children, &focus, Direction::Upward);
		assert_eq!(pairs(&edges), vec![(10.0, 60.0), (110.0, 60.0)]);

		let parent = [node(9, &[], &[3, 4, 5], 0.0)];
		assert_eq!(match_edges(&parent, &children, Direction::Downward).len(), 2);
	}

	#[test]
	fn empty_sets_and_rows_match_nothing() {
		let a = [node(1, &[], &[], 0.0)];
		let b = [node(2, &[], &[], 0.0)];
		assert!(match_edges(&a, &b, Direction::Downward).is_empty());
		assert!(match_edges(&[], &b, Direction::Upward).is_empty());
		assert!(match_edges(&a, &[], Direction::Downward).is_empty());
	}

	#[test]
	fn ids_compare_numerically() {
		// "1" would be a substring of "12" under string matching
		let from = [node(12, &[], &[1], 0.0)];
		let to = [node(1, &[], &[], 0.0), node(2, &[], &[], 40.0), node(12, &[], &[], 80.0)];
		assert_eq!(pairs(&match_edges(&from, &to, Direction::Downward)), vec![(10.0, 10.0)]);
	}

	#[test]
	fn directions_agree_on_consistent_data() {
		let upper = [node(2, &[], &[1, 5], 0.0), node(6, &[], &[5], 60.0)];
		let lower = [node(1, &[2], &[], 0.0), node(5, &[2, 6], &[], 90.0)];
		assert_eq!(down_and_up(&upper, &lower), vec![(10, 10), (10, 100), (70, 100)]);
	}

	/// Sorted `(upper, lower)` center pairs; the downward and upward passes must agree.
	fn down_and_up(upper: &[MeasuredNode], lower: &[MeasuredNode]) -> Vec<(i64, i64)> {
		let mut down: Vec<_> = match_edges(upper, lower, Direction::Downward)
			.iter()
			.map(|e| (e.from_x as i64, e.to_x as i64))
			.collect();
		let mut up: Vec<_> = match_edges(lower, upper, Direction::Upward)
			.iter()
			.map(|e| (e.to_x as i64, e.from_x as i64))
			.collect();
		down.sort();
		up.sort();
		assert_eq!(down, up);
		down
	}

	/// Row sizes plus an upper-index/lower-index relation between them.
	fn relation_strategy() -> impl Strategy<Value = (usize, usize, Vec<(usize, usize)>)> {
		(1usize..6, 1usize..6).prop_flat_map(|(uppers, lowers)| {
			let links = prop::collection::vec((0..uppers, 0..lowers), 0..12);
			(Just(uppers), Just(lowers), links)
		})
	}

	proptest! {
		#[test]
		fn prop_directions_agree(
			(uppers, lowers, links) in relation_strategy(),
			stray in prop::collection::btree_set(1_000i64..1_010, 0..3),
		) {
			let upper_id = |i: usize| i as i64;
			let lower_id = |j: usize| 100 + j as i64;
			let upper: Vec<_> = (0..uppers)
				.map(|i| {
					let mut children: Vec<i64> = links
						.iter()
						.filter(|(u, _)| *u == i)
						.map(|(_, l)| lower_id(*l))
						.collect();
					// ids of concepts that are not on screen never draw
					children.extend(stray.iter().copied());
					node(upper_id(i), &[], &children, i as f64 * 50.0)
				})
				.collect();
			let lower: Vec<_> = (0..lowers)
				.map(|j| {
					let parents: Vec<i64> = links
						.iter()
						.filter(|(_, l)| *l == j)
						.map(|(u, _)| upper_id(*u))
						.collect();
					node(lower_id(j), &parents, &[], j as f64 * 50.0)
				})
				.collect();

			let distinct: std::collections::BTreeSet<_> = links.iter().copied().collect();
			prop_assert_eq!(down_and_up(&upper, &lower).len(), distinct.len());
		}
	}
}
