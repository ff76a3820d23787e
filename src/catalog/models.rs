use serde::Deserialize;

/// A themed, pre-assembled gift package as authored in the catalog.
///
/// Records are immutable for the lifetime of the process; everything the
/// detail view shows comes straight from these fields, in stored order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hamper {
    pub id: u32,                                 // Unique within the catalog
    pub name: String,
    pub description: String,                     // Short card blurb
    pub image: String,                           // Hero image URL, shown on the card
    pub badge: String,                           // e.g. "Bestseller", "Limited Edition"
    pub category: String,                        // Decorative label, no filtering
    pub rating: f32,                             // 0.0..=5.0
    pub reviews: u32,
    pub contents: Vec<String>,                   // What's inside, authored order
    pub features: Vec<String>,                   // Marketing claims, authored order
    pub gallery: Vec<String>,                    // Image URLs, never empty
    pub story: String,
    pub ingredients: Vec<String>,
    pub nutritional_info: Vec<(String, String)>, // Label/value rows, display strings only
}

impl Hamper {
    /// How many of the five stars render filled for this rating.
    pub fn filled_stars(&self) -> usize {
        self.rating.floor() as usize
    }
}
