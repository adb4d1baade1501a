// Resort catalog - read-only after load
// The trait keeps the backing store swappable (static list today, an
// external data source later) without touching scorer or retriever.

use crate::Resort;

/// Read-only accessor over the full set of known resorts.
pub trait CatalogSource: Send + Sync {
    /// All resorts in catalog order. Order is stable for the process
    /// lifetime and drives ranking tie-breaks.
    fn all(&self) -> &[Resort];
}

/// In-memory catalog loaded once at construction.
pub struct StaticCatalog {
    resorts: Vec<Resort>,
}

impl StaticCatalog {
    pub fn new(resorts: Vec<Resort>) -> Self {
        Self { resorts }
    }

    /// The built-in development catalog.
    pub fn builtin() -> Self {
        Self::new(builtin_resorts())
    }
}

impl CatalogSource for StaticCatalog {
    fn all(&self) -> &[Resort] {
        &self.resorts
    }
}

fn resort(id: &str, name: &str, region: &str, description: &str, keywords: &[&str]) -> Resort {
    Resort {
        id: id.to_string(),
        name: name.to_string(),
        region: region.to_string(),
        description: description.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

fn builtin_resorts() -> Vec<Resort> {
    vec![
        resort(
            "1",
            "Whistler Blackcomb",
            "British Columbia, Canada",
            "World-class skiing with massive terrain and reliable snow conditions across two interconnected mountains.",
            &["expert_terrain", "luxury", "village_atmosphere", "large_resort"],
        ),
        resort(
            "2",
            "Aspen Snowmass",
            "Colorado, USA",
            "Iconic luxury resort with four mountains and vibrant après-ski scene in a historic mining town.",
            &["luxury", "nightlife", "expert_terrain", "historic"],
        ),
        resort(
            "3",
            "Jackson Hole Mountain Resort",
            "Wyoming, USA",
            "Steep terrain and deep powder with challenging runs for advanced skiers and breathtaking mountain views.",
            &["expert_terrain", "steep_slopes", "powder", "challenging"],
        ),
        resort(
            "4",
            "Park City Mountain Resort",
            "Utah, USA",
            "Family-friendly resort with diverse terrain and excellent snow quality, perfect for all skill levels.",
            &["family_friendly", "diverse_terrain", "good_snow", "beginner_friendly"],
        ),
        resort(
            "5",
            "Stowe Mountain Resort",
            "Vermont, USA",
            "Classic New England skiing with charming village atmosphere and reliable natural snowfall.",
            &["traditional", "village_atmosphere", "natural_snow", "east_coast"],
        ),
        resort(
            "6",
            "Chamonix Mont-Blanc",
            "France",
            "Legendary European ski destination with extreme off-piste terrain and rich mountaineering history.",
            &["expert_terrain", "off_piste", "european", "extreme", "historic"],
        ),
        resort(
            "7",
            "Niseko United",
            "Hokkaido, Japan",
            "Famous for its light, dry powder snow and unique Japanese culture and cuisine experience.",
            &["powder", "cultural_experience", "international", "unique_snow"],
        ),
    ]
}
