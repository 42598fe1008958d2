use crate::domain::model::BusinessRecord;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_list, Validate};

/// Seed records used for lookup. Never mutated by searches.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleCatalog {
    records: Vec<BusinessRecord>,
}

impl SampleCatalog {
    pub fn new(records: Vec<BusinessRecord>) -> Result<Self> {
        validate_non_empty_list("catalog", &records)?;
        for record in &records {
            record.validate()?;
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[BusinessRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &BusinessRecord> {
        self.records.iter()
    }

    /// The record a fresh session starts with.
    pub fn first(&self) -> &BusinessRecord {
        &self.records[0]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn sample(name: &str, location: &str, rating: f64, review_count: u32, headlines: [&str; 5]) -> BusinessRecord {
    BusinessRecord {
        name: name.to_string(),
        location: location.to_string(),
        rating,
        review_count,
        headline_variants: headlines.iter().map(|h| h.to_string()).collect(),
    }
}

impl Default for SampleCatalog {
    fn default() -> Self {
        let records = vec![
            sample(
                "Cake & Co",
                "Mumbai",
                4.7,
                328,
                [
                    "Why Cake & Co is Mumbai's Sweetest Spot in 2025",
                    "Cake & Co: Mumbai's Premier Bakery Experience",
                    "Discover the Magic of Cake & Co in Mumbai",
                    "Mumbai's Favorite Cake Destination: Cake & Co",
                    "Cake & Co - Redefining Bakery Excellence in Mumbai",
                ],
            ),
            sample(
                "Pizza Heaven",
                "Delhi",
                4.3,
                512,
                [
                    "Pizza Heaven: Delhi's Top Pizza Destination",
                    "Why Pizza Heaven Dominates Delhi's Food Scene",
                    "The Secret Behind Pizza Heaven's Delhi Success",
                    "Delhi's Pizza Lovers Flock to Pizza Heaven",
                    "Pizza Heaven - A Slice of Perfection in Delhi",
                ],
            ),
            sample(
                "Bean There",
                "Bangalore",
                4.8,
                276,
                [
                    "Bean There: Bangalore's Coffee Revolution",
                    "Why Bean There is Bangalore's Best Coffee Shop",
                    "The Art of Coffee at Bean There, Bangalore",
                    "Bangalore's Coffee Connoisseurs Choose Bean There",
                    "Bean There - Where Bangalore Gets Its Caffeine Fix",
                ],
            ),
            sample(
                "Burger Junction",
                "Hyderabad",
                4.2,
                419,
                [
                    "Burger Junction: Hyderabad's Burger Master",
                    "Hyderabad's Best Burgers at Burger Junction",
                    "The Ultimate Burger Experience in Hyderabad",
                    "Why Burger Junction Tops Hyderabad's Fast Food",
                    "Burger Junction - Hyderabad's Favorite Bite",
                ],
            ),
            sample(
                "Spice Trail",
                "Chennai",
                4.6,
                387,
                [
                    "Spice Trail: Chennai's Authentic Flavors",
                    "Chennai's Culinary Journey at Spice Trail",
                    "Why Spice Trail is Chennai's Top Restaurant",
                    "The Secret Spices of Chennai's Spice Trail",
                    "Spice Trail - Where Chennai's Food Culture Thrives",
                ],
            ),
        ];

        Self { records }
    }
}
