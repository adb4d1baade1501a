// Query keyword extraction - advisory enrichment stage
//
// The extracted list documents user intent and is surfaced to callers, but
// retrieval always runs on the raw query. Do not wire the extracted keywords
// into the retriever: that would change ranking behavior. This stays a
// documented no-op integration point until scoring is ready to consume it.

/// Prompt asking the model for a comma-separated keyword list.
pub fn extraction_prompt(query: &str) -> String {
    format!(
        r#"Analyze this ski resort preference query and extract key skiing-related keywords and preferences:

Query: "{}"

Extract keywords related to:
- Terrain difficulty (beginner, intermediate, expert, challenging, steep)
- Resort style (luxury, family-friendly, traditional, cultural)
- Snow conditions (powder, natural snow, reliable snow)
- Atmosphere (nightlife, village, historic, quiet)
- Location preferences (European, North American, international)

Return only a comma-separated list of relevant keywords, lowercase, using underscores instead of spaces.
Example: expert_terrain, luxury, nightlife, powder"#,
        query
    )
}

/// Parse the model's comma-separated reply: trim, lowercase, drop empties.
pub fn parse_keyword_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|keyword| keyword.trim().to_lowercase())
        .filter(|keyword| !keyword.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keyword_list() {
        let parsed = parse_keyword_list("expert_terrain, Luxury , nightlife,powder");
        assert_eq!(parsed, vec!["expert_terrain", "luxury", "nightlife", "powder"]);
    }

    #[test]
    fn test_parse_drops_empty_tokens() {
        let parsed = parse_keyword_list(" , powder,, ,village_atmosphere, ");
        assert_eq!(parsed, vec!["powder", "village_atmosphere"]);
    }

    #[test]
    fn test_parse_empty_reply() {
        assert!(parse_keyword_list("").is_empty());
        assert!(parse_keyword_list("   ").is_empty());
    }

    #[test]
    fn test_extraction_prompt_embeds_query() {
        let prompt = extraction_prompt("deep powder in Japan");
        assert!(prompt.contains(r#"Query: "deep powder in Japan""#));
        assert!(prompt.contains("comma-separated"));
    }
}
