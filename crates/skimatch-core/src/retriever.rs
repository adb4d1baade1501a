// Retriever - ranks catalog entries by lexical relevance
// Stable sort keeps catalog order on equal scores, so ranking is fully
// deterministic for an unchanged catalog.

use std::sync::Arc;

use crate::catalog::CatalogSource;
use crate::scorer::RelevanceScorer;
use crate::Resort;

pub const DEFAULT_LIMIT: usize = 3;

#[derive(Debug, Clone)]
struct ScoredResort {
    resort: Resort,
    score: u32,
}

pub struct Retriever {
    catalog: Arc<dyn CatalogSource>,
    scorer: RelevanceScorer,
}

impl Retriever {
    pub fn new(catalog: Arc<dyn CatalogSource>) -> Self {
        Self {
            catalog,
            scorer: RelevanceScorer::new(),
        }
    }

    /// Top `limit` resorts for the query, best first. Resorts scoring 0 are
    /// dropped; an unmatched or empty query yields an empty vec, never an
    /// error. `limit` of 0 yields an empty vec regardless of scores.
    pub fn retrieve(&self, query: &str, limit: usize) -> Vec<Resort> {
        if limit == 0 {
            return Vec::new();
        }

        let terms = RelevanceScorer::terms(query);
        if terms.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<ScoredResort> = self
            .catalog
            .all()
            .iter()
            .map(|resort| ScoredResort {
                resort: resort.clone(),
                score: self.scorer.score(&terms, resort),
            })
            .filter(|s| s.score > 0)
            .collect();

        // stable: equal scores keep catalog order
        scored.sort_by(|a, b| b.score.cmp(&a.score));

        scored
            .into_iter()
            .take(limit)
            .map(|s| s.resort)
            .collect()
    }

    /// The full backing catalog, in catalog order.
    pub fn catalog(&self) -> &[Resort] {
        self.catalog.all()
    }
}
