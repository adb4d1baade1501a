// Trip spark generation - one-shot creative text for a single resort
// Independent of catalog and retriever; the caller supplies the resort
// fields directly.

use serde::{Deserialize, Serialize};

/// Resort fields for a spark request. `resort_keywords` may be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SparkRequest {
    pub resort_id: String,
    pub resort_name: String,
    pub resort_location: String,
    pub resort_description: String,
    #[serde(default)]
    pub resort_keywords: Vec<String>,
}

/// Short evocative description for exactly one resort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripSpark {
    pub spark: String,
}

pub fn spark_prompt(req: &SparkRequest) -> String {
    format!(
        r#"Create an imaginative and inspiring "trip spark" for a ski trip to this resort.
This should be a short, evocative 2-3 sentence description that captures the magic and excitement of skiing at this location.

Resort: {name}
Location: {location}
Description: {description}
Characteristics: {keywords}

The trip spark should:
- Be creative and evocative, not just factual
- Paint a vivid picture of a specific moment or experience
- Capture the unique atmosphere and feeling of this resort
- Make the reader excited and inspired to visit
- Be 2-3 sentences maximum

Examples of good trip sparks:
- "Picture yourself carving through champagne powder at sunrise, the mountain silent except for the whisper of your skis, then warming up with sake and ramen in a traditional mountain hut as snowflakes dance past the windows."
- "Imagine descending steep couloirs with the Alps spread out below you like a frozen sea, then celebrating your conquests with wine and cheese in a cozy mountain refuge as the alpine glow paints the peaks rose-gold."

Create a unique trip spark for {name}:"#,
        name = req.resort_name,
        location = req.resort_location,
        description = req.resort_description,
        keywords = req.resort_keywords.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spark_prompt_embeds_resort_fields() {
        let req = SparkRequest {
            resort_id: "7".to_string(),
            resort_name: "Niseko United".to_string(),
            resort_location: "Hokkaido, Japan".to_string(),
            resort_description: "Famous for its light, dry powder snow.".to_string(),
            resort_keywords: vec!["powder".to_string(), "cultural_experience".to_string()],
        };

        let prompt = spark_prompt(&req);
        assert!(prompt.contains("Resort: Niseko United"));
        assert!(prompt.contains("Location: Hokkaido, Japan"));
        assert!(prompt.contains("Characteristics: powder, cultural_experience"));
        assert!(prompt.contains("Create a unique trip spark for Niseko United:"));
    }

    #[test]
    fn test_spark_prompt_with_empty_keywords() {
        let req = SparkRequest {
            resort_id: "1".to_string(),
            resort_name: "Somewhere".to_string(),
            resort_location: "Alps".to_string(),
            resort_description: "Snow.".to_string(),
            resort_keywords: Vec::new(),
        };

        assert!(spark_prompt(&req).contains("Characteristics: \n"));
    }
}
