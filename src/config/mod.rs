pub mod toml_config;

use crate::core::recent::DEFAULT_RECENT_LIMIT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, Validate};
use std::time::Duration;
use toml_config::{TomlConfig, DEFAULT_REGENERATE_DELAY_MS, DEFAULT_SEARCH_DELAY_MS};

#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "biz-insights"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Look up business ratings and SEO headlines with running statistics")
)]
pub struct CliConfig {
    /// Search to run, as "NAME, LOCATION" (repeatable, applied in order)
    #[cfg_attr(feature = "cli", arg(short, long = "search", value_name = "NAME, LOCATION"))]
    pub searches: Vec<String>,

    /// Headline regenerations to run after the last search
    #[cfg_attr(feature = "cli", arg(short, long, default_value = "0"))]
    pub regenerate: usize,

    /// Path to a TOML configuration file
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(long))]
    pub search_delay_ms: Option<u64>,

    #[cfg_attr(feature = "cli", arg(long))]
    pub regenerate_delay_ms: Option<u64>,

    #[cfg_attr(feature = "cli", arg(long))]
    pub recent_limit: Option<usize>,

    /// Seed for reproducible synthesized records
    #[cfg_attr(feature = "cli", arg(long))]
    pub seed: Option<u64>,

    /// Print the final dashboard as JSON
    #[cfg_attr(feature = "cli", arg(long))]
    pub json: bool,

    /// Emit logs as JSON
    #[cfg_attr(feature = "cli", arg(long))]
    pub log_json: bool,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl CliConfig {
    /// Command-line values win over the file.
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(ms) = self.search_delay_ms {
            config.dashboard.search_delay_ms = Some(ms);
        }
        if let Some(ms) = self.regenerate_delay_ms {
            config.dashboard.regenerate_delay_ms = Some(ms);
        }
        if let Some(limit) = self.recent_limit {
            config.dashboard.recent_limit = Some(limit);
        }
        if let Some(seed) = self.seed {
            config.dashboard.seed = Some(seed);
        }
    }
}

impl ConfigProvider for CliConfig {
    fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms.unwrap_or(DEFAULT_SEARCH_DELAY_MS))
    }

    fn regenerate_delay(&self) -> Duration {
        Duration::from_millis(
            self.regenerate_delay_ms
                .unwrap_or(DEFAULT_REGENERATE_DELAY_MS),
        )
    }

    fn recent_limit(&self) -> usize {
        self.recent_limit.unwrap_or(DEFAULT_RECENT_LIMIT)
    }

    fn rng_seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(limit) = self.recent_limit {
            validate_positive_number("recent_limit", limit, 1)?;
        }
        Ok(())
    }
}
