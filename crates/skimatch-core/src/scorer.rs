// Lexical relevance scorer
// Pure substring overlap between query terms and resort fields, no model
// call. The weights are load-bearing: keyword matches count double, name
// matches double again.

use crate::Resort;

pub struct RelevanceScorer;

impl RelevanceScorer {
    pub fn new() -> Self {
        Self
    }

    /// Split a query into scoring terms: lowercase, whitespace-separated,
    /// terms of length <= 2 discarded.
    pub fn terms(query: &str) -> Vec<String> {
        query
            .to_lowercase()
            .split_whitespace()
            .filter(|t| t.len() > 2)
            .map(|t| t.to_string())
            .collect()
    }

    /// Non-negative relevance of a resort for the given terms.
    /// score = description_hits + keyword_hits * 2 + name_location_hits
    pub fn score(&self, terms: &[String], resort: &Resort) -> u32 {
        if terms.is_empty() {
            return 0;
        }

        let description = resort.description.to_lowercase();
        let name = resort.name.to_lowercase();
        let region = resort.region.to_lowercase();
        let keywords: Vec<String> = resort.keywords.iter().map(|k| k.to_lowercase()).collect();

        let mut description_hits = 0u32;
        let mut keyword_hits = 0u32;
        let mut name_location_hits = 0u32;

        for term in terms {
            if description.contains(term.as_str()) {
                description_hits += 1;
            }

            // a single term may match several keywords
            for keyword in &keywords {
                if keyword.contains(term.as_str()) {
                    keyword_hits += 1;
                }
            }

            // name and region may both fire for the same term
            if name.contains(term.as_str()) {
                name_location_hits += 2;
            }
            if region.contains(term.as_str()) {
                name_location_hits += 1;
            }
        }

        description_hits + keyword_hits * 2 + name_location_hits
    }
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        Self::new()
    }
}
