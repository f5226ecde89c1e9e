//! Decoding of the concept search backend's taxonomy response.
//!
//! Ids arrive either as JSON integers or numeric strings. Relationship sets
//! arrive either as JSON arrays or as one hyphen-joined string (`"3-7-12"`).
//! Hyphen is the only delimiter accepted in joined form, so a negative id cannot
//! be joined: the token after an empty one is dropped. Anything else that does
//! not parse (fractions, booleans, objects, bare numbers) is dropped too, which
//! only costs the affected node its edges.

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use super::types::{Concept, ConceptId, IdSet, NamedTaxonomy, Taxonomy};

/// Why a search response could not be turned into taxonomies.
#[derive(Debug, Error)]
pub enum WireError {
	/// The body is not JSON of the expected shape.
	#[error("malformed taxonomy response: {0}")]
	Json(#[from] serde_json::Error),
	/// A concept's own id is not an integer.
	#[error("concept {text:?} has non-numeric id {id:?}")]
	ConceptId {
		/// The id as it appeared on the wire.
		id: String,
		/// Label of the offending concept.
		text: String,
	},
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum WireId {
	Number(i64),
	Text(String),
}

impl WireId {
	fn parse(&self) -> Option<ConceptId> {
		match self {
			WireId::Number(n) => Some(ConceptId(*n)),
			WireId::Text(s) => s.trim().parse().ok().map(ConceptId),
		}
	}

	fn raw(&self) -> String {
		match self {
			WireId::Number(n) => n.to_string(),
			WireId::Text(s) => s.clone(),
		}
	}
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum WireIdSet {
	List(Vec<serde_json::Value>),
	Joined(String),
	Other(serde_json::Value),
}

fn list_item(item: &serde_json::Value) -> Option<ConceptId> {
	match item {
		serde_json::Value::Number(n) => n.as_i64().map(ConceptId),
		serde_json::Value::String(s) => s.trim().parse().ok().map(ConceptId),
		_ => None,
	}
}

impl WireIdSet {
	fn parse(&self) -> IdSet {
		let mut ids = IdSet::new();
		match self {
			WireIdSet::List(list) => {
				for item in list {
					match list_item(item) {
						Some(id) => {
							ids.insert(id);
						}
						None => debug!("skipping relationship id {item}"),
					}
				}
			}
			WireIdSet::Joined(joined) => {
				// An empty token means a doubled or leading hyphen, so the token after it
				// may have lost its sign. Drop it rather than draw an edge to the wrong id.
				let mut after_gap = false;
				for token in joined.split('-').map(str::trim) {
					if token.is_empty() {
						after_gap = true;
						continue;
					}
					if std::mem::take(&mut after_gap) {
						debug!("skipping relationship id {token:?} after empty token in {joined:?}");
						continue;
					}
					match token.parse() {
						Ok(id) => {
							ids.insert(ConceptId(id));
						}
						Err(_) => debug!("skipping relationship id {token:?}"),
					}
				}
			}
			WireIdSet::Other(value) => debug!("ignoring relationship set {value}"),
		}
		ids
	}
}

/// A concept as serialized by the backend.
#[derive(Clone, Debug, Deserialize)]
pub struct WireConcept {
	id: WireId,
	text: String,
	#[serde(default)]
	parent_ids: Option<WireIdSet>,
	#[serde(default)]
	children_ids: Option<WireIdSet>,
}

impl TryFrom<WireConcept> for Concept {
	type Error = WireError;

	fn try_from(wire: WireConcept) -> Result<Self, Self::Error> {
		let id = wire.id.parse().ok_or_else(|| WireError::ConceptId {
			id: wire.id.raw(),
			text: wire.text.clone(),
		})?;
		Ok(Concept {
			id,
			parent_ids: wire.parent_ids.as_ref().map(WireIdSet::parse).unwrap_or_default(),
			children_ids: wire.children_ids.as_ref().map(WireIdSet::parse).unwrap_or_default(),
			text: wire.text,
		})
	}
}

/// One entry of the search response: a snapshot from one named taxonomy.
#[derive(Clone, Debug, Deserialize)]
pub struct WireTaxonomy {
	name: String,
	concept: WireConcept,
	#[serde(default)]
	parents: Vec<WireConcept>,
	#[serde(default)]
	subparents: Vec<WireConcept>,
	#[serde(default)]
	children: Vec<WireConcept>,
	#[serde(default)]
	subchildren: Vec<WireConcept>,
}

fn concepts(wire: Vec<WireConcept>) -> Result<Vec<Concept>, WireError> {
	wire.into_iter().map(Concept::try_from).collect()
}

impl TryFrom<WireTaxonomy> for NamedTaxonomy {
	type Error = WireError;

	fn try_from(wire: WireTaxonomy) -> Result<Self, Self::Error> {
		Ok(NamedTaxonomy {
			name: wire.name,
			taxonomy: Taxonomy {
				concept: wire.concept.try_into()?,
				parents: concepts(wire.parents)?,
				subparents: concepts(wire.subparents)?,
				children: concepts(wire.children)?,
				subchildren: concepts(wire.subchildren)?,
			},
		})
	}
}

/// The full search response: one entry per taxonomy that was searched.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct SearchResponse(Vec<WireTaxonomy>);

impl SearchResponse {
	/// Converts every entry, failing on the first concept with an unusable id.
	pub fn into_taxonomies(self) -> Result<Vec<NamedTaxonomy>, WireError> {
		self.0.into_iter().map(NamedTaxonomy::try_from).collect()
	}
}

/// Parses a raw search response body.
pub fn decode_search_response(json: &str) -> Result<Vec<NamedTaxonomy>, WireError> {
	serde_json::from_str::<SearchResponse>(json)?.into_taxonomies()
}
