use crate::domain::model::{BusinessRecord, DashboardSnapshot};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn search_delay(&self) -> Duration;
    fn regenerate_delay(&self) -> Duration;
    fn recent_limit(&self) -> usize;
    fn rng_seed(&self) -> Option<u64>;
}

/// Request surface of one dashboard session.
#[async_trait]
pub trait InsightsService: Send + Sync {
    async fn search(&self, name: &str, location: &str) -> Result<BusinessRecord>;
    async fn regenerate_headline(&self) -> Result<String>;
    async fn replay_recent(&self, index: usize) -> Result<BusinessRecord>;
    async fn select_headline(&self, index: usize) -> Result<String>;
    async fn snapshot(&self) -> DashboardSnapshot;
}
