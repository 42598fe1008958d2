pub mod aggregator;
pub mod catalog;
pub mod engine;
pub mod headline;
pub mod recent;
pub mod resolver;
pub mod session;

pub use crate::domain::model::{BusinessRecord, DashboardSnapshot, SearchAggregate, SearchQuery};
pub use crate::domain::ports::{ConfigProvider, InsightsService};
pub use crate::utils::error::Result;
