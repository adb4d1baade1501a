//! Core types for the resort matching system
//! this crate contains the shared data structures and the pure retrieval
//! pipeline (catalog, scorer, retriever) used across all components.
pub mod catalog;
pub mod retriever;
pub mod scorer;

use serde::{Deserialize, Serialize};

pub use catalog::{CatalogSource, StaticCatalog};
pub use retriever::{Retriever, DEFAULT_LIMIT};
pub use scorer::RelevanceScorer;

// RESORT //

/// A ski resort record. Loaded once at catalog startup, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resort {
    pub id: String, // unique within the catalog

    pub name: String,

    pub region: String, // human-readable location label, e.g. "Colorado, USA"

    pub description: String,

    pub keywords: Vec<String>, // lowercase, underscore_delimited traits
}

// SUGGESTION (pipeline output)

/// A resort paired with a generated justification text.
/// The resort is always drawn from the catalog unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub resort: Resort,

    pub why_it_fits: String,
}
