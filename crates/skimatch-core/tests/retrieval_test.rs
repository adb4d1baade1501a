use std::sync::Arc;

use skimatch_core::{CatalogSource, RelevanceScorer, Resort, Retriever, StaticCatalog, DEFAULT_LIMIT};

fn builtin_retriever() -> Retriever {
    Retriever::new(Arc::new(StaticCatalog::builtin()))
}

fn make_resort(id: &str, name: &str, keywords: &[&str]) -> Resort {
    Resort {
        id: id.to_string(),
        name: name.to_string(),
        region: "Testland".to_string(),
        description: "A test resort.".to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

#[test]
fn test_retrieve_respects_limit() {
    let retriever = builtin_retriever();

    // "skiing" appears in several descriptions
    for limit in 0..5 {
        let results = retriever.retrieve("skiing resort snow", limit);
        assert!(results.len() <= limit, "limit {} returned {}", limit, results.len());
    }
}

#[test]
fn test_retrieve_never_returns_zero_scores() {
    let retriever = builtin_retriever();
    let scorer = RelevanceScorer::new();
    let terms = RelevanceScorer::terms("powder snow");

    for resort in retriever.retrieve("powder snow", 10) {
        assert!(scorer.score(&terms, &resort) > 0, "{} scored 0", resort.name);
    }
}

#[test]
fn test_retrieve_is_idempotent() {
    let retriever = builtin_retriever();

    let first = retriever.retrieve("luxury expert terrain", DEFAULT_LIMIT);
    let second = retriever.retrieve("luxury expert terrain", DEFAULT_LIMIT);
    assert_eq!(first, second);
}

#[test]
fn test_ties_keep_catalog_order() {
    // two resorts with identical keyword sets score equally for "glacier"
    let catalog = StaticCatalog::new(vec![
        make_resort("a", "First Glacier Park", &["glacier_skiing"]),
        make_resort("b", "Second Glacier Park", &["glacier_skiing"]),
    ]);
    let retriever = Retriever::new(Arc::new(catalog));

    let results = retriever.retrieve("glacier", 2);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, "a");
    assert_eq!(results[1].id, "b");
}

#[test]
fn test_ranking_is_descending() {
    let retriever = builtin_retriever();
    let scorer = RelevanceScorer::new();
    let terms = RelevanceScorer::terms("luxury expert terrain powder");

    let results = retriever.retrieve("luxury expert terrain powder", 7);
    let scores: Vec<u32> = results.iter().map(|r| scorer.score(&terms, r)).collect();
    for pair in scores.windows(2) {
        assert!(pair[0] >= pair[1], "scores not descending: {:?}", scores);
    }
}

#[test]
fn test_whistler_scenario() {
    // catalog with only Whistler Blackcomb and the canonical preference query
    let whistler = StaticCatalog::builtin().all()[0].clone();
    assert_eq!(whistler.name, "Whistler Blackcomb");

    let catalog = StaticCatalog::new(vec![whistler.clone()]);
    let retriever = Retriever::new(Arc::new(catalog));

    let scorer = RelevanceScorer::new();
    let terms = RelevanceScorer::terms("luxury expert terrain");
    assert!(scorer.score(&terms, &whistler) > 0);

    let results = retriever.retrieve("luxury expert terrain", DEFAULT_LIMIT);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0], whistler);
}

#[test]
fn test_unmatched_query_returns_empty() {
    let retriever = builtin_retriever();
    assert!(retriever.retrieve("xyzzy", DEFAULT_LIMIT).is_empty());
}

#[test]
fn test_empty_query_returns_empty() {
    let retriever = builtin_retriever();
    assert!(retriever.retrieve("", DEFAULT_LIMIT).is_empty());
    assert!(retriever.retrieve("   ", DEFAULT_LIMIT).is_empty());
    // nothing longer than 2 chars
    assert!(retriever.retrieve("a be in", DEFAULT_LIMIT).is_empty());
}

#[test]
fn test_zero_limit_returns_empty() {
    let retriever = builtin_retriever();
    assert!(retriever.retrieve("luxury expert terrain", 0).is_empty());
}

#[test]
fn test_empty_catalog_returns_empty() {
    let retriever = Retriever::new(Arc::new(StaticCatalog::new(Vec::new())));
    assert!(retriever.retrieve("luxury", DEFAULT_LIMIT).is_empty());
}

#[test]
fn test_no_duplicates_in_results() {
    let retriever = builtin_retriever();
    let results = retriever.retrieve("snow terrain powder village", 7);

    let mut ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), results.len());
}

#[test]
fn test_results_are_catalog_records_unchanged() {
    let catalog = Arc::new(StaticCatalog::builtin());
    let retriever = Retriever::new(Arc::clone(&catalog) as Arc<dyn CatalogSource>);

    for found in retriever.retrieve("powder japan", 7) {
        let original = catalog
            .all()
            .iter()
            .find(|r| r.id == found.id)
            .expect("retrieved resort missing from catalog");
        assert_eq!(&found, original);
    }
}
