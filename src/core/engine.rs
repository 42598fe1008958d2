use crate::core::catalog::SampleCatalog;
use crate::core::recent::parse_entry;
use crate::core::session::DashboardSession;
use crate::domain::model::{BusinessRecord, DashboardSnapshot, SearchQuery};
use crate::domain::ports::{ConfigProvider, InsightsService};
use crate::utils::error::{InsightsError, Result};
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::{Mutex, MutexGuard};

/// Runs one dashboard session with simulated request latency.
///
/// Only one operation may be in flight: the session is held for the whole
/// delay, and anything issued meanwhile fails with `OperationPending` instead
/// of queueing. A started operation always applies its result.
pub struct DashboardEngine<C: ConfigProvider> {
    config: C,
    catalog: SampleCatalog,
    session: Mutex<DashboardSession<StdRng>>,
}

impl<C: ConfigProvider> DashboardEngine<C> {
    pub fn new(config: C, catalog: SampleCatalog) -> Self {
        let rng = match config.rng_seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, catalog, rng)
    }

    pub fn with_rng(config: C, catalog: SampleCatalog, rng: StdRng) -> Self {
        let session = DashboardSession::new(&catalog, rng, config.recent_limit());
        tracing::debug!(
            "Dashboard session started on '{}' ({} catalog entries)",
            catalog.first().search_label(),
            catalog.len()
        );
        Self {
            config,
            catalog,
            session: Mutex::new(session),
        }
    }

    fn acquire(&self, operation: &str) -> Result<MutexGuard<'_, DashboardSession<StdRng>>> {
        self.session.try_lock().map_err(|_| {
            tracing::warn!("Rejected '{}' while another operation is pending", operation);
            InsightsError::pending(operation)
        })
    }

    async fn run_search(&self, query: SearchQuery) -> Result<BusinessRecord> {
        let mut session = self.acquire("search")?;

        tracing::debug!("Searching for '{}'", query.label());
        tokio::time::sleep(self.config.search_delay()).await;

        let (record, kind) = session.apply_search(query, &self.catalog);
        let record = record.clone();
        let stats = session.stats();
        tracing::info!(
            "Resolved '{}' ({:?}): rating {:.1}, {} reviews | searches {}, average {:.2}",
            record.search_label(),
            kind,
            record.rating,
            record.review_count,
            stats.total_searches,
            stats.average_rating
        );

        Ok(record)
    }
}

#[async_trait]
impl<C: ConfigProvider> InsightsService for DashboardEngine<C> {
    async fn search(&self, name: &str, location: &str) -> Result<BusinessRecord> {
        let query = SearchQuery::new(name, location).inspect_err(|e| {
            tracing::warn!("Search rejected: {}", e);
        })?;
        self.run_search(query).await
    }

    async fn regenerate_headline(&self) -> Result<String> {
        let mut session = self.acquire("regenerate")?;

        tokio::time::sleep(self.config.regenerate_delay()).await;

        let index = session.rotate_headline();
        let headline = session.current_headline().to_string();
        tracing::info!("Headline {} selected for '{}'", index, session.current().name);
        Ok(headline)
    }

    async fn replay_recent(&self, index: usize) -> Result<BusinessRecord> {
        let entry = {
            let session = self.acquire("search")?;
            session.recent().get(index).map(str::to_string)
        };

        let entry = entry.ok_or_else(|| {
            InsightsError::validation("recent_index", format!("No recent search at position {}", index))
        })?;
        let (name, location) = parse_entry(&entry).ok_or_else(|| {
            InsightsError::validation("recent_index", format!("Cannot replay '{}'", entry))
        })?;

        self.search(&name, &location).await
    }

    async fn select_headline(&self, index: usize) -> Result<String> {
        let mut session = self.acquire("select headline")?;
        let headline = session.select_headline(index)?.to_string();
        Ok(headline)
    }

    async fn snapshot(&self) -> DashboardSnapshot {
        self.session.lock().await.snapshot()
    }
}
