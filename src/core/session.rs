use crate::core::aggregator;
use crate::core::catalog::SampleCatalog;
use crate::core::headline::{self, DEFAULT_ALTERNATIVES};
use crate::core::recent::RecentSearchLog;
use crate::core::resolver::{self, MatchKind};
use crate::domain::model::{
    BusinessRecord, DashboardSnapshot, HeadlineOption, SearchAggregate, SearchQuery,
};
use crate::utils::error::{InsightsError, Result};
use rand::Rng;

/// All mutable state of one dashboard session.
#[derive(Debug)]
pub struct DashboardSession<R: Rng> {
    current: BusinessRecord,
    headline_index: usize,
    stats: SearchAggregate,
    recent: RecentSearchLog,
    last_query: Option<SearchQuery>,
    rng: R,
}

impl<R: Rng> DashboardSession<R> {
    /// Starts on the first catalog record, which already counts as one search.
    pub fn new(catalog: &SampleCatalog, rng: R, recent_limit: usize) -> Self {
        let seed = catalog.first().clone();
        Self {
            stats: SearchAggregate::seeded_from(&seed),
            current: seed,
            headline_index: 0,
            recent: RecentSearchLog::new(recent_limit),
            last_query: None,
            rng,
        }
    }

    pub fn apply_search(&mut self, query: SearchQuery, catalog: &SampleCatalog) -> (&BusinessRecord, MatchKind) {
        let (record, kind) =
            resolver::resolve_with_kind(&query.name, &query.location, catalog, &mut self.rng);

        self.recent.record(&query.label());
        self.stats = aggregator::update(&self.stats, &record);
        self.current = record;
        self.headline_index = 0;
        self.last_query = Some(query);

        (&self.current, kind)
    }

    pub fn rotate_headline(&mut self) -> usize {
        self.headline_index = headline::rotate(
            &self.current.headline_variants,
            self.headline_index,
            &mut self.rng,
        );
        self.headline_index
    }

    pub fn select_headline(&mut self, index: usize) -> Result<&str> {
        if index >= self.current.headline_variants.len() {
            return Err(InsightsError::validation(
                "headline_index",
                format!(
                    "Headline {} does not exist; '{}' has {} headlines",
                    index,
                    self.current.name,
                    self.current.headline_variants.len()
                ),
            ));
        }
        self.headline_index = index;
        Ok(self.current_headline())
    }

    pub fn current(&self) -> &BusinessRecord {
        &self.current
    }

    pub fn current_headline(&self) -> &str {
        &self.current.headline_variants[self.headline_index]
    }

    pub fn headline_index(&self) -> usize {
        self.headline_index
    }

    pub fn alternative_headlines(&self) -> Vec<HeadlineOption> {
        headline::alternatives(
            &self.current.headline_variants,
            self.headline_index,
            DEFAULT_ALTERNATIVES,
        )
    }

    pub fn stats(&self) -> &SearchAggregate {
        &self.stats
    }

    pub fn recent(&self) -> &RecentSearchLog {
        &self.recent
    }

    pub fn last_query(&self) -> Option<&SearchQuery> {
        self.last_query.as_ref()
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            business: self.current.clone(),
            headline_index: self.headline_index,
            headline: self.current_headline().to_string(),
            other_headlines: self.alternative_headlines(),
            stats: self.stats.clone(),
            recent_searches: self.recent.entries().to_vec(),
            last_query: self.last_query.clone(),
        }
    }
}
