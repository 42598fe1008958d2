pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::aggregator::update;
pub use crate::core::catalog::SampleCatalog;
pub use crate::core::engine::DashboardEngine;
pub use crate::core::headline::rotate;
pub use crate::core::recent::push;
pub use crate::core::resolver::resolve;
pub use crate::core::session::DashboardSession;
pub use crate::domain::model::{BusinessRecord, DashboardSnapshot, HighestRated, SearchAggregate, SearchQuery};
pub use crate::domain::ports::{ConfigProvider, InsightsService};
pub use crate::utils::error::{InsightsError, Result};
