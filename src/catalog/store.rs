use std::collections::HashSet;

use super::{
    errors::HamperError,
    models::Hamper,
};

/// The full catalog, compiled into the binary. There is no backing store and
/// no way to mutate it after load.
const BUILT_IN: &str = include_str!("../../assets/catalog.json");

#[derive(Debug, Clone)]
pub struct Catalog {
    hampers: Vec<Hamper>,
}

impl Catalog {
    /// Parse and validate the embedded catalog. Only fails if the shipped
    /// data itself is broken, so any error here aborts launch.
    pub fn load_built_in() -> Result<Self, HamperError> {
        let hampers: Vec<Hamper> = serde_json::from_str(BUILT_IN)?;
        Self::from_hampers(hampers)
    }

    pub fn from_hampers(hampers: Vec<Hamper>) -> Result<Self, HamperError> {
        let catalog = Self { hampers };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), HamperError> {
        if self.hampers.is_empty() {
            return Err(HamperError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for hamper in &self.hampers {
            if hamper.gallery.is_empty() {
                return Err(HamperError::EmptyGallery(hamper.name.clone()));
            }
            if !(0.0..=5.0).contains(&hamper.rating) {
                return Err(HamperError::RatingOutOfRange {
                    name: hamper.name.clone(),
                    rating: hamper.rating,
                });
            }
            if !seen.insert(hamper.id) {
                return Err(HamperError::DuplicateId(hamper.id));
            }
        }

        Ok(())
    }

    /// All records in authored order.
    pub fn hampers(&self) -> &[Hamper] {
        &self.hampers
    }

    pub fn get(&self, id: u32) -> Option<&Hamper> {
        self.hampers.iter().find(|h| h.id == id)
    }

    pub fn len(&self) -> usize {
        self.hampers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hampers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_hamper(id: u32) -> Hamper {
        Hamper {
            id,
            name: format!("Hamper {}", id),
            description: "A sample hamper".to_string(),
            image: "https://example.com/a.jpg".to_string(),
            badge: "Sample".to_string(),
            category: "Samples".to_string(),
            rating: 4.5,
            reviews: 10,
            contents: vec!["One thing".to_string()],
            features: vec!["Featureful".to_string()],
            gallery: vec!["https://example.com/a.jpg".to_string()],
            story: "Once upon a time.".to_string(),
            ingredients: vec!["Sugar".to_string()],
            nutritional_info: vec![("Calories".to_string(), "1 per serving".to_string())],
        }
    }

    #[test]
    fn built_in_catalog_loads_and_validates() {
        let catalog = Catalog::load_built_in().expect("embedded catalog should parse");
        assert!(!catalog.is_empty());

        for hamper in catalog.hampers() {
            assert!(!hamper.gallery.is_empty(), "{} has no gallery", hamper.name);
            assert!(
                (0.0..=5.0).contains(&hamper.rating),
                "{} rating out of range",
                hamper.name
            );
        }
    }

    #[test]
    fn built_in_ids_are_unique() {
        let catalog = Catalog::load_built_in().unwrap();
        let mut seen = HashSet::new();
        for hamper in catalog.hampers() {
            assert!(seen.insert(hamper.id), "duplicate id {}", hamper.id);
        }
    }

    #[test]
    fn built_in_card_image_leads_each_gallery() {
        let catalog = Catalog::load_built_in().unwrap();
        for hamper in catalog.hampers() {
            assert_eq!(hamper.gallery[0], hamper.image, "{}", hamper.name);
        }
    }

    #[test]
    fn nutrition_rows_keep_authored_order() {
        let catalog = Catalog::load_built_in().unwrap();
        let chocolate = catalog.get(1).expect("record 1 exists");
        let labels: Vec<&str> =
            chocolate.nutritional_info.iter().map(|(label, _)| label.as_str()).collect();
        assert_eq!(labels, ["Calories", "Fat", "Carbs", "Protein", "Sugar"]);
    }

    #[test]
    fn filled_stars_floor_the_rating() {
        let mut hamper = sample_hamper(1);
        hamper.rating = 4.9;
        assert_eq!(hamper.filled_stars(), 4);
        hamper.rating = 5.0;
        assert_eq!(hamper.filled_stars(), 5);
        hamper.rating = 0.0;
        assert_eq!(hamper.filled_stars(), 0);
    }

    #[test]
    fn get_finds_records_by_id() {
        let catalog = Catalog::load_built_in().unwrap();
        assert!(catalog.get(1).is_some());
        assert!(catalog.get(9999).is_none());
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(matches!(Catalog::from_hampers(Vec::new()), Err(HamperError::EmptyCatalog)));
    }

    #[test]
    fn rejects_empty_gallery() {
        let mut hamper = sample_hamper(1);
        hamper.gallery.clear();
        assert!(matches!(
            Catalog::from_hampers(vec![hamper]),
            Err(HamperError::EmptyGallery(_))
        ));
    }

    #[test]
    fn rejects_rating_out_of_range() {
        let mut hamper = sample_hamper(1);
        hamper.rating = 5.1;
        assert!(matches!(
            Catalog::from_hampers(vec![hamper]),
            Err(HamperError::RatingOutOfRange { .. })
        ));

        let mut hamper = sample_hamper(1);
        hamper.rating = -0.1;
        assert!(matches!(
            Catalog::from_hampers(vec![hamper]),
            Err(HamperError::RatingOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let hampers = vec![sample_hamper(7), sample_hamper(7)];
        assert!(matches!(Catalog::from_hampers(hampers), Err(HamperError::DuplicateId(7))));
    }
}
