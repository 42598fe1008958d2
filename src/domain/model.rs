use crate::utils::error::{InsightsError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_range, Validate,
};
use serde::{Deserialize, Serialize};

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub review_count: u32,
    /// Index 0 is the headline shown by default.
    pub headline_variants: Vec<String>,
}

impl BusinessRecord {
    /// Text stored in the recent-search log for this business.
    pub fn search_label(&self) -> String {
        format!("{}, {}", self.name, self.location)
    }
}

impl Validate for BusinessRecord {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("catalog.name", &self.name)?;
        validate_non_empty_string("catalog.location", &self.location)?;
        validate_range("catalog.rating", self.rating, MIN_RATING, MAX_RATING)?;
        validate_non_empty_list("catalog.headline_variants", &self.headline_variants)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighestRated {
    pub name: String,
    pub rating: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchAggregate {
    pub total_searches: u64,
    pub average_rating: f64,
    pub highest_rated: Option<HighestRated>,
}

impl SearchAggregate {
    /// Aggregate state at session start: one search already counted for the seed record.
    pub fn seeded_from(record: &BusinessRecord) -> Self {
        Self {
            total_searches: 1,
            average_rating: record.rating,
            highest_rated: Some(HighestRated {
                name: record.name.clone(),
                rating: record.rating,
            }),
        }
    }
}

/// A (name, location) pair that passed the required-field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub name: String,
    pub location: String,
}

impl SearchQuery {
    pub fn new(name: &str, location: &str) -> Result<Self> {
        let name = name.trim();
        let location = location.trim();

        if name.is_empty() || location.is_empty() {
            let field = if name.is_empty() { "name" } else { "location" };
            return Err(InsightsError::validation(
                field,
                "Both business name and location are required",
            ));
        }

        Ok(Self {
            name: name.to_string(),
            location: location.to_string(),
        })
    }

    pub fn label(&self) -> String {
        format!("{}, {}", self.name, self.location)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlineOption {
    pub index: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub business: BusinessRecord,
    pub headline_index: usize,
    pub headline: String,
    pub other_headlines: Vec<HeadlineOption>,
    pub stats: SearchAggregate,
    pub recent_searches: Vec<String>,
    /// What the user typed for the search that produced `business`.
    pub last_query: Option<SearchQuery>,
}

impl DashboardSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
