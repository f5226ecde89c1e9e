//! Five-row taxonomy concept map: rows of concept links with canvas edges between them.

mod component;
pub mod compositor;
pub mod config;
pub mod geometry;
pub mod listener;
pub mod matcher;
pub mod orchestrator;
pub mod renderer;
pub mod types;
pub mod viewport;
pub mod wire;

pub use component::ConceptMap;
pub use config::ConceptMapConfig;
pub use types::{Concept, ConceptId, Direction, IdSet, NamedTaxonomy, RowKind, RowPair, Taxonomy};
pub use wire::{WireError, decode_search_response};
